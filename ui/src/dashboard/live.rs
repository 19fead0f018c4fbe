//! Simulated "active users right now" counter.

use dioxus::prelude::*;
use rand::Rng;

use crate::core::{config::app_config, format::format_count, timing};

pub const MIN_ACTIVE_USERS: f64 = 10.0;
pub const MAX_ACTIVE_USERS: f64 = 400.0;

pub fn initial_active_users<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (50.0 + rng.gen::<f64>() * 150.0).round() as u32
}

/// One tick of the random walk, biased slightly upwards and clamped.
pub fn next_active_users<R: Rng + ?Sized>(current: u32, rng: &mut R) -> u32 {
    let delta = (rng.gen::<f64>() - 0.4) * 20.0;
    (f64::from(current) + delta)
        .clamp(MIN_ACTIVE_USERS, MAX_ACTIVE_USERS)
        .round() as u32
}

#[component]
pub fn LiveUsersCard() -> Element {
    let mut active = use_signal(|| initial_active_users(&mut rand::thread_rng()));

    use_future(move || async move {
        let tick = app_config().live_tick_ms;
        loop {
            timing::sleep_ms(tick).await;
            let next = next_active_users(*active.peek(), &mut rand::thread_rng());
            active.set(next);
        }
    });

    rsx! {
        div { class: "live-card",
            span { class: "live-card__pulse", aria_hidden: "true" }
            div {
                span { class: "live-card__label", "Active users right now" }
                strong { class: "live-card__value", "{format_count(u64::from(active()))}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn initial_value_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let v = initial_active_users(&mut rng);
            assert!((50..=200).contains(&v), "{v}");
        }
    }

    #[test]
    fn walk_moves_at_most_twelve_and_stays_clamped() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut current = 200;
        for _ in 0..1_000 {
            let next = next_active_users(current, &mut rng);
            assert!(next.abs_diff(current) <= 12, "{current} -> {next}");
            assert!((10..=400).contains(&next));
            current = next;
        }
    }

    #[test]
    fn bounds_hold_at_the_edges() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert!(next_active_users(10, &mut rng) >= 10);
            assert!(next_active_users(400, &mut rng) <= 400);
        }
    }
}
