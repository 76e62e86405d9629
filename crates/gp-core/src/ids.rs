//! Identity generation
//!
//! Every runtime object gets a fresh id from an [`IdGenerator`] owned by the
//! simulation and passed to constructors. Two generators started from the same
//! value hand out the same sequence, which keeps replays deterministic.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Player or monster
    EntityId
);
id_type!(
    /// Item instance (inventory, equipment or shop stock)
    ItemId
);
id_type!(ProjectileId);
id_type!(TextId);
id_type!(MessageId);
id_type!(
    /// Door, bed, chest, fountain or stall placed on the map
    ObjectId
);
id_type!(HouseId);
id_type!(NpcId);

impl EntityId {
    /// The player always carries this id
    pub const PLAYER: EntityId = EntityId(0);
}

/// Monotonic id source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    pub fn entity(&mut self) -> EntityId {
        EntityId(self.bump())
    }

    pub fn item(&mut self) -> ItemId {
        ItemId(self.bump())
    }

    pub fn projectile(&mut self) -> ProjectileId {
        ProjectileId(self.bump())
    }

    pub fn text(&mut self) -> TextId {
        TextId(self.bump())
    }

    pub fn message(&mut self) -> MessageId {
        MessageId(self.bump())
    }

    pub fn object(&mut self) -> ObjectId {
        ObjectId(self.bump())
    }

    pub fn house(&mut self) -> HouseId {
        HouseId(self.bump())
    }

    pub fn npc(&mut self) -> NpcId {
        NpcId(self.bump())
    }
}
