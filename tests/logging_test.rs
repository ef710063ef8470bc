use rask_log_wiring::logging::{LogDirective, LogLevel, LoggingError, init_tracing};
use rask_log_wiring::{AddProcessorsPass, ContainerBuilder, Definition, Tag};

// Installs the global subscriber, so it gets its own test binary.
#[test]
fn test_init_tracing_installs_global_subscriber_once() {
    let directives = [LogDirective::parse("rask_log_wiring=debug").unwrap()];

    init_tracing(LogLevel::Warn, &directives).unwrap();
    assert!(tracing::enabled!(target: "rask_log_wiring", tracing::Level::DEBUG));
    assert!(!tracing::enabled!(target: "toml", tracing::Level::INFO));

    let mut container = ContainerBuilder::new()
        .register("monolog.logger", Definition::new())
        .register("monolog.logger_prototype", Definition::new())
        .register(
            "app.processor",
            Definition::new().with_tag(Tag::new("monolog.processor")),
        );
    AddProcessorsPass::new().process(&mut container).unwrap();

    let second = init_tracing(LogLevel::Info, &[]);
    assert!(matches!(second, Err(LoggingError::InitFailed { .. })));
}
