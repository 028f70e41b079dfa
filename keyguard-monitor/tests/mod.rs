use keyguard_core::{
    CarrierInfo, CarrierLabelType, KeyguardConfig, LockStatus, SimCardState, StatusLines,
};
use keyguard_monitor::{KeyguardEvent, KeyguardMonitor, MonitorError};

// ============================================================================
// Event Processing Tests
// ============================================================================

#[tokio::test]
async fn test_monitor_sim_state_change_emits_update() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    monitor.sim_state_changed(SimCardState::PinRequired).await.unwrap();

    let update = rx.recv().await.unwrap();
    assert_eq!(update.status, LockStatus::SimLocked);
    assert_eq!(update.view.carrier_text, "SIM card is locked.");
}

#[tokio::test]
async fn test_monitor_one_update_per_event_in_order() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    monitor.sim_state_changed(SimCardState::Absent).await.unwrap();
    monitor.sim_state_changed(SimCardState::PukRequired).await.unwrap();
    monitor.sim_state_changed(SimCardState::Ready).await.unwrap();

    let statuses = [
        rx.recv().await.unwrap().status,
        rx.recv().await.unwrap().status,
        rx.recv().await.unwrap().status,
    ];
    assert_eq!(
        statuses,
        [LockStatus::SimMissing, LockStatus::SimPukLocked, LockStatus::Normal]
    );
}

#[tokio::test]
async fn test_monitor_carrier_refresh_keeps_status() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    monitor.sim_state_changed(SimCardState::Ready).await.unwrap();
    let first = rx.recv().await.unwrap();
    assert_eq!(first.view.carrier_text, "");

    monitor
        .carrier_info_refreshed(CarrierInfo::new(Some("Acme"), Some("Mobile")))
        .await
        .unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(second.status, LockStatus::Normal);
    assert_eq!(second.view.carrier_text, "Acme|Mobile");
}

#[tokio::test]
async fn test_monitor_config_change_rederives() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    monitor.sim_state_changed(SimCardState::PukRequired).await.unwrap();
    assert_eq!(rx.recv().await.unwrap().status, LockStatus::SimPukLocked);

    let airplane = KeyguardConfig {
        airplane_mode_on: true,
        ..KeyguardConfig::default()
    };
    monitor.config_changed(airplane).await.unwrap();
    assert_eq!(rx.recv().await.unwrap().status, LockStatus::Normal);
}

#[tokio::test]
async fn test_monitor_custom_label_from_config() {
    let config = KeyguardConfig {
        carrier_label_type: CarrierLabelType::Custom,
        carrier_label_custom: Some("$s$n$p".to_string()),
        ..KeyguardConfig::default()
    };
    let (monitor, mut rx) = KeyguardMonitor::start(config);

    monitor
        .send(KeyguardEvent::CarrierInfoRefreshed(
            CarrierInfo::new(Some("Acme"), Some("Mobile")).with_operator_alpha("Acme"),
        ))
        .await
        .unwrap();
    monitor.sim_state_changed(SimCardState::Ready).await.unwrap();

    // Carrier info arrived while the SIM state was still unknown.
    assert_eq!(rx.recv().await.unwrap().status, LockStatus::SimMissing);
    let update = rx.recv().await.unwrap();
    assert_eq!(update.view.carrier_text, "Mobile\nAcme");
}

#[tokio::test]
async fn test_monitor_status_lines_follow_status() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    let lines = StatusLines {
        next_alarm: Some("Mon 07:00".to_string()),
        ..StatusLines::default()
    };
    monitor.status_lines_changed(lines.clone()).await.unwrap();
    assert!(rx.recv().await.unwrap().view.status_lines.is_none());

    monitor.sim_state_changed(SimCardState::Ready).await.unwrap();
    assert_eq!(rx.recv().await.unwrap().view.status_lines, Some(lines));
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_monitor_stop_closes_updates() {
    let (monitor, mut rx) = KeyguardMonitor::start(KeyguardConfig::default());

    monitor.stop().await.unwrap();
    assert!(rx.recv().await.is_none());

    let result = monitor.sim_state_changed(SimCardState::Ready).await;
    assert_eq!(result, Err(MonitorError::Closed));
}

#[test]
fn test_monitor_error_display() {
    assert_eq!(
        MonitorError::Closed.to_string(),
        "keyguard monitor task is closed"
    );
}

#[tokio::test]
async fn test_monitor_debug() {
    let (monitor, _rx) = KeyguardMonitor::start(KeyguardConfig::default());
    let debug = format!("{:?}", monitor);
    assert!(debug.contains("KeyguardMonitor"));
}
