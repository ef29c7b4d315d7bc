use std::time::Duration;

use tokio::process::Command;

use super::*;

#[tokio::test]
async fn test_signal() {
    let mut handler = SignalHandler::new()
        .with_signal(SignalKind::user_defined1())
        .with_signal(SignalKind::user_defined2());

    // Signal our own pid, the handler should pick it up
    let pid = std::process::id();

    Command::new("kill")
        .arg("-s")
        .arg("SIGUSR1")
        .arg(pid.to_string())
        .status()
        .await
        .expect("failed to send SIGUSR1");

    let kind = tokio::time::timeout(Duration::from_secs(1), handler.recv())
        .await
        .expect("failed to receive signal");
    assert_eq!(kind, SignalKind::user_defined1());

    Command::new("kill")
        .arg("-s")
        .arg("SIGUSR2")
        .arg(pid.to_string())
        .status()
        .await
        .expect("failed to send SIGUSR2");

    let kind = tokio::time::timeout(Duration::from_secs(1), handler.recv())
        .await
        .expect("failed to receive signal");
    assert_eq!(kind, SignalKind::user_defined2());
}
