use std::fmt;

macro_rules! object_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the object in its session, in creation order.
            #[must_use]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }
    };
}

object_id!(
    /// Handle to a [`Geometry`](super::Geometry) owned by a session.
    GeometryId,
    "geometry"
);
object_id!(
    /// Handle to a [`Physics`](super::Physics) owned by a session.
    PhysicsId,
    "physics"
);
object_id!(
    /// Handle to a [`Fluid`](super::Fluid) owned by a session.
    FluidId,
    "fluid"
);

/// Any object in a session that can own properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Network,
    Geometry(GeometryId),
    Physics(PhysicsId),
    Fluid(FluidId),
}

impl From<GeometryId> for ObjectId {
    fn from(id: GeometryId) -> Self {
        ObjectId::Geometry(id)
    }
}

impl From<PhysicsId> for ObjectId {
    fn from(id: PhysicsId) -> Self {
        ObjectId::Physics(id)
    }
}

impl From<FluidId> for ObjectId {
    fn from(id: FluidId) -> Self {
        ObjectId::Fluid(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Network => f.write_str("network"),
            ObjectId::Geometry(id) => id.fmt(f),
            ObjectId::Physics(id) => id.fmt(f),
            ObjectId::Fluid(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(GeometryId(2).to_string(), "geometry #2");
        assert_eq!(ObjectId::from(FluidId(0)).to_string(), "fluid #0");
        assert_eq!(ObjectId::Network.to_string(), "network");
    }
}
