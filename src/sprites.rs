//! Ownship sprite selection
//!
//! Aircraft carry a class bitmask; the sprite drawn at the center of the
//! overlay depends on which class bits are set. Loading the asset is the
//! host's job — this table only names the sprite and the size it should be
//! rendered at.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Aircraft class bitmask.
    ///
    /// Several bits may be set on one aircraft; sprite selection resolves
    /// them in a fixed priority order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AircraftType: u32 {
        const BOMBER = 1 << 0;
        const TANKER = 1 << 1;
        const AIRLINER = 1 << 2;
        const FIGHTER = 1 << 3;
        const GA = 1 << 4;
        const GLIDER = 1 << 5;
        const HELICOPTER = 1 << 6;
        const CARGO = 1 << 7;
        const UAV = 1 << 8;
    }
}

/// A sprite asset and the size it renders at, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteSpec {
    /// Asset name relative to the host's sprite directory
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
}

const fn spec(path: &'static str, width: u32, height: u32) -> SpriteSpec {
    SpriteSpec {
        path,
        width,
        height,
    }
}

/// Select the ownship sprite for an aircraft type.
///
/// Class bits are checked in a fixed priority order, so a combined mask
/// (say bomber + tanker) resolves to the first matching class. Tankers and
/// airliners share the civil sprite. An empty or unknown mask falls back to
/// the general-aviation sprite.
pub fn ownship_sprite(ty: AircraftType) -> SpriteSpec {
    if ty.intersects(AircraftType::BOMBER) {
        spec("sprites/ownship/bomber.svg", 20, 32)
    } else if ty.intersects(AircraftType::TANKER | AircraftType::AIRLINER) {
        spec("sprites/ownship/civil.svg", 32, 24)
    } else if ty.intersects(AircraftType::FIGHTER) {
        spec("sprites/ownship/fighter.svg", 32, 20)
    } else if ty.intersects(AircraftType::GA) {
        spec("sprites/ownship/ga.svg", 32, 22)
    } else if ty.intersects(AircraftType::GLIDER) {
        spec("sprites/ownship/glider.svg", 16, 36)
    } else if ty.intersects(AircraftType::HELICOPTER) {
        spec("sprites/ownship/helo.svg", 36, 30)
    } else if ty.intersects(AircraftType::CARGO) {
        spec("sprites/ownship/transport.svg", 32, 32)
    } else if ty.intersects(AircraftType::UAV) {
        spec("sprites/ownship/uas.svg", 16, 32)
    } else {
        spec("sprites/ownship/ga.svg", 32, 22)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_class_has_a_sprite() {
        let cases = [
            (AircraftType::BOMBER, "sprites/ownship/bomber.svg", 20, 32),
            (AircraftType::TANKER, "sprites/ownship/civil.svg", 32, 24),
            (AircraftType::AIRLINER, "sprites/ownship/civil.svg", 32, 24),
            (AircraftType::FIGHTER, "sprites/ownship/fighter.svg", 32, 20),
            (AircraftType::GA, "sprites/ownship/ga.svg", 32, 22),
            (AircraftType::GLIDER, "sprites/ownship/glider.svg", 16, 36),
            (AircraftType::HELICOPTER, "sprites/ownship/helo.svg", 36, 30),
            (AircraftType::CARGO, "sprites/ownship/transport.svg", 32, 32),
            (AircraftType::UAV, "sprites/ownship/uas.svg", 16, 32),
        ];

        for (ty, path, width, height) in cases {
            let sprite = ownship_sprite(ty);
            assert_eq!(sprite.path, path);
            assert_eq!(sprite.width, width);
            assert_eq!(sprite.height, height);
        }
    }

    #[test]
    fn test_priority_order() {
        // Bomber wins over fighter when both bits are set
        let combined = AircraftType::BOMBER | AircraftType::FIGHTER;
        assert_eq!(ownship_sprite(combined).path, "sprites/ownship/bomber.svg");

        // Fighter wins over GA
        let combined = AircraftType::FIGHTER | AircraftType::GA;
        assert_eq!(
            ownship_sprite(combined).path,
            "sprites/ownship/fighter.svg"
        );
    }

    #[test]
    fn test_empty_mask_falls_back_to_ga() {
        let sprite = ownship_sprite(AircraftType::empty());
        assert_eq!(sprite.path, "sprites/ownship/ga.svg");
        assert_eq!((sprite.width, sprite.height), (32, 22));
    }
}
