use crate::config::ServiceSettings;
use crate::service::{ServiceStatus, ServiceSupervisor};

fn settings(command: &str, args: &[&str]) -> ServiceSettings {
    ServiceSettings {
        command: command.into(),
        args: args.iter().map(|s| s.to_string()).collect(),
        // Nothing listens here, so readiness probes fail and the status
        // stays Starting for the lifetime of these tests.
        address: "http://127.0.0.1:1".into(),
        startup_timeout_secs: 1,
        shutdown_timeout_secs: 1,
    }
}

#[tokio::test]
async fn test_initial_status_is_stopped() {
    let supervisor = ServiceSupervisor::new(settings("true", &[]));

    assert_eq!(supervisor.status().await, ServiceStatus::Stopped);
}

#[tokio::test]
async fn test_stop_without_child_is_a_no_op() {
    let supervisor = ServiceSupervisor::new(settings("true", &[]));

    assert!(supervisor.stop().await.is_ok());
    assert_eq!(supervisor.status().await, ServiceStatus::Stopped);
}

#[tokio::test]
async fn test_spawn_failure_reports_error_status() {
    let supervisor = ServiceSupervisor::new(settings("easycue-no-such-binary", &[]));

    assert!(supervisor.start().await.is_err());
    assert!(matches!(
        supervisor.status().await,
        ServiceStatus::Error(_)
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_start_then_stop_runs_the_full_arc() {
    let supervisor = ServiceSupervisor::new(settings("sleep", &["60"]));

    supervisor.start().await.unwrap();
    assert_eq!(supervisor.status().await, ServiceStatus::Starting);

    supervisor.stop().await.unwrap();
    assert_eq!(supervisor.status().await, ServiceStatus::Stopped);
}

#[cfg(unix)]
#[tokio::test]
async fn test_start_while_starting_is_a_no_op() {
    let supervisor = ServiceSupervisor::new(settings("sleep", &["60"]));

    supervisor.start().await.unwrap();
    assert!(supervisor.start().await.is_ok());

    supervisor.stop().await.unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_exited_child_is_reaped_to_stopped() {
    let supervisor = ServiceSupervisor::new(settings("true", &[]));

    supervisor.start().await.unwrap();

    // `true` exits immediately; give it a moment, then observe the reap.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(supervisor.status().await, ServiceStatus::Stopped);
}
