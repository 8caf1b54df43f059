//! Near-bottom tracking for the message list.

use serde::Deserialize;

/// Distance from the bottom edge under which the list keeps following new messages.
pub const NEAR_BOTTOM_THRESHOLD_PX: f64 = 100.0;

/// Scroll position of the message list, as reported by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn distance_from_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    pub fn is_near_bottom(&self) -> bool {
        self.distance_from_bottom() < NEAR_BOTTOM_THRESHOLD_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowAction {
    /// Smooth-scroll to the newest entry.
    ScrollToEnd,
    /// Leave the viewport where the reader put it.
    Hold,
}

/// What the list does after its contents change.
pub fn follow_action(at_bottom: bool) -> FollowAction {
    if at_bottom {
        FollowAction::ScrollToEnd
    } else {
        FollowAction::Hold
    }
}

pub fn jump_control_visible(at_bottom: bool) -> bool {
    !at_bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 2000.0,
            client_height: 600.0,
        }
    }

    #[test]
    fn test_at_exact_bottom() {
        let m = metrics(1400.0);
        assert_eq!(m.distance_from_bottom(), 0.0);
        assert!(m.is_near_bottom());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(metrics(1301.0).is_near_bottom());
        assert!(!metrics(1300.0).is_near_bottom());
    }

    #[test]
    fn test_scrolled_up_holds_position() {
        let m = metrics(200.0);
        assert!(!m.is_near_bottom());
        assert_eq!(follow_action(m.is_near_bottom()), FollowAction::Hold);
        assert!(jump_control_visible(m.is_near_bottom()));
    }

    #[test]
    fn test_near_bottom_follows() {
        let m = metrics(1350.0);
        assert_eq!(follow_action(m.is_near_bottom()), FollowAction::ScrollToEnd);
        assert!(!jump_control_visible(m.is_near_bottom()));
    }

    #[test]
    fn test_short_content_counts_as_bottom() {
        let m = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 300.0,
            client_height: 600.0,
        };
        assert!(m.is_near_bottom());
    }

    #[test]
    fn test_deserializes_renderer_payload() {
        let m: ScrollMetrics = serde_json::from_str(
            r#"{"scrollTop": 10, "scrollHeight": 900.5, "clientHeight": 400}"#,
        )
        .unwrap();
        assert_eq!(m.scroll_top, 10.0);
        assert_eq!(m.scroll_height, 900.5);
    }
}
