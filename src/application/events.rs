use crate::domain::LayerId;

/// A change to a manager's stack or toast slot, delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerEvent {
    Pushed { id: LayerId, index: usize },
    Popped { id: LayerId, index: usize },
    ToastShown { id: LayerId, replaced: Option<LayerId> },
    /// `expired` is true when the toast's lifespan ran out.
    ToastCleared { id: LayerId, expired: bool },
    CompletionFired { id: LayerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Observer = Box<dyn FnMut(&LayerEvent)>;
