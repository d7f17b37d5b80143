//! Compass subscription lifecycle tests.

use std::sync::Arc;
use std::time::Duration;

use dd_app::CompassLifecycle;
use dd_core::screen::{ScreenPatch, SensorState};
use dd_platform::sim::SimCompass;
use dd_platform::{screen_channel, ScreenLoop};

const SAMPLING: Duration = Duration::from_millis(50);

fn lifecycle(compass: &Arc<SimCompass>) -> (CompassLifecycle, ScreenLoop) {
    let (handle, ui) = screen_channel();
    (
        CompassLifecycle::new(compass.clone(), handle, SAMPLING),
        ui,
    )
}

async fn next_patch(ui: &mut ScreenLoop) -> ScreenPatch {
    tokio::time::timeout(Duration::from_secs(1), ui.apply_next())
        .await
        .expect("patch expected before timeout")
        .expect("screen channel still open")
}

// Five readings delivered off the interface context appear in delivery
// order on the interface side.
#[tokio::test]
async fn readings_project_in_delivery_order() {
    let compass = Arc::new(SimCompass::new());
    let (lifecycle, mut ui) = lifecycle(&compass);

    lifecycle.on_screen_shown().await.unwrap();
    assert_eq!(lifecycle.state().await, SensorState::Active);

    compass
        .emit_burst(vec![10.0, 95.0, 180.0, 270.0, 355.0])
        .await
        .unwrap();

    let mut labels = Vec::new();
    for _ in 0..5 {
        let ScreenPatch::Heading { label } = next_patch(&mut ui).await else {
            panic!("expected a heading patch");
        };
        labels.push(label);
    }

    assert_eq!(
        labels,
        vec![
            "Heading: 10°",
            "Heading: 95°",
            "Heading: 180°",
            "Heading: 270°",
            "Heading: 355°",
        ]
    );

    lifecycle.on_screen_hidden().await;
}

#[tokio::test]
async fn teardown_is_idempotent_towards_the_provider() {
    let compass = Arc::new(SimCompass::new());
    let (lifecycle, _ui) = lifecycle(&compass);

    lifecycle.on_screen_shown().await.unwrap();
    lifecycle.on_screen_hidden().await;
    assert_eq!(lifecycle.state().await, SensorState::Inactive);
    assert_eq!(compass.unregister_calls(), 1);

    lifecycle.on_screen_hidden().await;
    assert_eq!(lifecycle.state().await, SensorState::Inactive);
    assert_eq!(
        compass.unregister_calls(),
        1,
        "a second teardown must not reach the provider"
    );
}

#[tokio::test]
async fn teardown_leaves_zero_pending_callbacks() {
    let compass = Arc::new(SimCompass::new());
    let (lifecycle, mut ui) = lifecycle(&compass);

    lifecycle.on_screen_shown().await.unwrap();
    lifecycle.on_screen_hidden().await;

    assert!(!compass.is_sampling(), "provider sampling stopped");

    // Whatever the provider tries to deliver now goes nowhere.
    compass.emit_burst(vec![42.0]).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let mut heading_patches = 0;
    loop {
        match tokio::time::timeout(Duration::from_millis(200), ui.apply_next()).await {
            Ok(Some(ScreenPatch::Heading { label })) => {
                if label.starts_with("Heading:") {
                    heading_patches += 1;
                }
            }
            Ok(Some(_)) => {}
            // Queue drained or every producer gone: nothing else arrives.
            Ok(None) | Err(_) => break,
        }
    }
    assert_eq!(heading_patches, 0, "no reading survives deactivation");
    assert_eq!(ui.model().heading, "Compass inactive");
}

#[tokio::test]
async fn double_show_keeps_a_single_registration() {
    let compass = Arc::new(SimCompass::new());
    let (lifecycle, _ui) = lifecycle(&compass);

    lifecycle.on_screen_shown().await.unwrap();
    lifecycle.on_screen_shown().await.unwrap();

    assert_eq!(lifecycle.state().await, SensorState::Active);
    assert!(compass.is_sampling());

    lifecycle.on_screen_hidden().await;
    assert_eq!(compass.unregister_calls(), 1);
}

#[tokio::test]
async fn activation_after_teardown_registers_again() {
    let compass = Arc::new(SimCompass::new());
    let (lifecycle, mut ui) = lifecycle(&compass);

    lifecycle.on_screen_shown().await.unwrap();
    lifecycle.on_screen_hidden().await;

    lifecycle.on_screen_shown().await.unwrap();
    assert_eq!(lifecycle.state().await, SensorState::Active);

    compass.emit_burst(vec![90.0]).await.unwrap();
    loop {
        let ScreenPatch::Heading { label } = next_patch(&mut ui).await else {
            continue;
        };
        if label == "Heading: 90°" {
            break;
        }
    }

    lifecycle.on_screen_hidden().await;
}
