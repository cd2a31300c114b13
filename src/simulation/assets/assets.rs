use crate::domain::AssetError;

/// Result of an asynchronous asset load, published once by its completion callback.
///
/// Readers must treat anything but `Ready` as "not there yet / never will be".
#[derive(Debug, Clone, Default)]
pub enum AssetSlot<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(AssetError),
}

impl<T> AssetSlot<T> {
    /// Publish the loaded value. Only the first completion counts.
    pub fn publish(&mut self, value: T) -> bool {
        if !matches!(self, AssetSlot::Pending) {
            return false;
        }
        *self = AssetSlot::Ready(value);
        true
    }

    /// Record a load failure. Only the first completion counts.
    pub fn fail(&mut self, reason: impl Into<String>) -> bool {
        if !matches!(self, AssetSlot::Pending) {
            return false;
        }
        *self = AssetSlot::Failed(AssetError::LoadFailed(reason.into()));
        true
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            AssetSlot::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            AssetSlot::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AssetSlot::Ready(_))
    }

    pub fn error(&self) -> Option<&AssetError> {
        match self {
            AssetSlot::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_completion_wins() {
        let mut slot: AssetSlot<u32> = AssetSlot::default();
        assert!(slot.get().is_none());
        assert!(slot.publish(7));
        assert!(!slot.publish(8));
        assert!(!slot.fail("late"));
        assert_eq!(slot.get(), Some(&7));
    }

    #[test]
    fn failure_is_permanent() {
        let mut slot: AssetSlot<u32> = AssetSlot::default();
        assert!(slot.fail("404"));
        assert!(!slot.publish(1));
        assert!(slot.get().is_none());
        assert_eq!(slot.error(), Some(&AssetError::LoadFailed("404".into())));
    }
}
