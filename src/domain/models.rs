use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a layer or toast.
///
/// Ids come from a process-wide counter, so two layers never share one even
/// when they live in different managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    pub fn next() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a layer animates when it enters and leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryStyle {
    Instant,
    #[default]
    Animated,
}

/// Screen edge an animated layer slides in from. `None` fades instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryDirection {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

/// Snapshot of one overlay's presentation metadata.
///
/// This is what content functions receive. The content itself is stored next
/// to the snapshot by the manager, so a layer can always be copied out freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub id: LayerId,
    pub entry_style: EntryStyle,
    pub entry_direction: EntryDirection,
    /// Zero means the layer stays until dismissed.
    pub lifespan: Duration,
    pub is_modal: bool,
    pub is_dismissable: bool,
}

impl Layer {
    pub fn new(
        entry_style: EntryStyle,
        entry_direction: EntryDirection,
        is_modal: bool,
        is_dismissable: bool,
    ) -> Self {
        Self {
            id: LayerId::next(),
            entry_style,
            entry_direction,
            lifespan: Duration::ZERO,
            is_modal,
            is_dismissable,
        }
    }

    /// Toasts always animate, never dim what is beneath them and expire on their own.
    pub fn toast(entry_direction: EntryDirection, lifespan: Duration) -> Self {
        Self {
            id: LayerId::next(),
            entry_style: EntryStyle::Animated,
            entry_direction,
            lifespan,
            is_modal: false,
            is_dismissable: false,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.entry_style == EntryStyle::Animated
    }

    pub fn expires(&self) -> bool {
        !self.lifespan.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_ids_are_unique() {
        let a = LayerId::next();
        let b = LayerId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_layer_id_display() {
        let id = LayerId::next();
        assert_eq!(id.to_string(), format!("#{}", id.value()));
    }

    #[test]
    fn test_new_layer_is_indefinite() {
        let layer = Layer::new(EntryStyle::Instant, EntryDirection::Left, true, false);
        assert!(!layer.expires());
        assert!(!layer.is_animated());
        assert!(layer.is_modal);
        assert!(!layer.is_dismissable);
    }

    #[test]
    fn test_toast_layer_defaults() {
        let layer = Layer::toast(EntryDirection::Top, Duration::from_secs(2));
        assert!(layer.expires());
        assert!(layer.is_animated());
        assert!(!layer.is_modal);
        assert_eq!(layer.entry_direction, EntryDirection::Top);
    }

    #[test]
    fn test_entry_defaults() {
        assert_eq!(EntryStyle::default(), EntryStyle::Animated);
        assert_eq!(EntryDirection::default(), EntryDirection::None);
    }

    #[test]
    fn test_entry_enums_serialize_by_name() {
        let json = serde_json::to_string(&(EntryStyle::Instant, EntryDirection::Left)).unwrap();
        assert_eq!(json, r#"["Instant","Left"]"#);

        let parsed: (EntryStyle, EntryDirection) = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, (EntryStyle::Instant, EntryDirection::Left));
        assert!(serde_json::from_str::<EntryDirection>(r#""Diagonal""#).is_err());
    }
}
