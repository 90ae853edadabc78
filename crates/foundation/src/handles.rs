use std::fmt;

/// Raw identity carried by a [`ConnectionHandle`].
pub type ConnectionId = usize;

/// Opaque handle to a scheduler connection.
///
/// A handle is either valid or the all-ones invalid sentinel. Equality and
/// hashing only look at `id`, so handles can key a `HashMap` directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionHandle {
    pub id: ConnectionId,
}

impl ConnectionHandle {
    pub const INVALID_ID: ConnectionId = ConnectionId::MAX;
    pub const INVALID: Self = Self {
        id: Self::INVALID_ID,
    };

    /// Wraps `id` without checking it for uniqueness.
    pub const fn new(id: ConnectionId) -> Self {
        Self { id }
    }

    pub const fn is_valid(&self) -> bool {
        self.id != Self::INVALID_ID
    }
}

impl Default for ConnectionHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<ConnectionHandle> for bool {
    fn from(handle: ConnectionHandle) -> bool {
        handle.is_valid()
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "conn#{}", self.id)
        } else {
            write!(f, "conn#invalid")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionHandle, ConnectionId};
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(handle: ConnectionHandle) -> u64 {
        let mut hasher = DefaultHasher::new();
        handle.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn default_is_invalid() {
        let handle = ConnectionHandle::default();
        assert!(!handle.is_valid());
        assert_eq!(handle, ConnectionHandle::INVALID);
        assert!(!bool::from(handle));
    }

    #[test]
    fn equal_ids_compare_and_hash_equal() {
        let a = ConnectionHandle::new(42);
        let b = ConnectionHandle::new(42);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
        assert!(bool::from(a));
    }

    #[test]
    fn two_invalid_handles_are_equal() {
        assert_eq!(
            ConnectionHandle::default(),
            ConnectionHandle::new(ConnectionHandle::INVALID_ID)
        );
    }

    #[test]
    fn keys_a_hash_map() {
        let mut clients = HashMap::new();
        clients.insert(ConnectionHandle::new(1), "app");
        clients.insert(ConnectionHandle::new(2), "sf");
        clients.insert(ConnectionHandle::new(1), "app-replaced");
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[&ConnectionHandle::new(1)], "app-replaced");
        assert!(!clients.contains_key(&ConnectionHandle::default()));
    }

    #[test]
    fn display_names_the_id() {
        assert_eq!(ConnectionHandle::new(7).to_string(), "conn#7");
        assert_eq!(ConnectionHandle::INVALID.to_string(), "conn#invalid");
    }

    proptest! {
        #[test]
        fn any_non_sentinel_id_is_valid(id in 0..ConnectionId::MAX) {
            prop_assert!(ConnectionHandle::new(id).is_valid());
        }

        #[test]
        fn equality_tracks_id_and_hash_agrees(a in any::<ConnectionId>(), b in any::<ConnectionId>()) {
            let (ha, hb) = (ConnectionHandle::new(a), ConnectionHandle::new(b));
            prop_assert_eq!(ha == hb, a == b);
            if ha == hb {
                prop_assert_eq!(hash_of(ha), hash_of(hb));
            }
        }
    }
}
