use rapier3d::prelude::*;

use crate::config::SurfacesConfig;

/// Which of the two contact surfaces a collider belongs to.
///
/// Pairing table: ground x ground = (friction 0.4, restitution 0.3),
/// slick x ground = (0.0, 0.3). Per-collider coefficients express it: the
/// sled carries friction 0 with a `Min` combine rule, so any pair involving
/// the sled resolves to frictionless while ground x ground keeps its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Slick,
}

pub fn apply_surface(
    builder: ColliderBuilder,
    kind: SurfaceKind,
    cfg: &SurfacesConfig,
) -> ColliderBuilder {
    match kind {
        SurfaceKind::Ground => builder
            .friction(cfg.ground.friction)
            .restitution(cfg.ground.restitution),
        SurfaceKind::Slick => builder
            .friction(cfg.sled.friction)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .restitution(cfg.sled.restitution),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_surface_coefficients() {
        let cfg = SurfacesConfig::default();
        let c = apply_surface(ColliderBuilder::cuboid(1.0, 1.0, 1.0), SurfaceKind::Ground, &cfg)
            .build();
        assert!((c.friction() - 0.4).abs() < 1e-6);
        assert!((c.restitution() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn slick_surface_wins_any_pair() {
        let cfg = SurfacesConfig::default();
        let c = apply_surface(ColliderBuilder::cuboid(1.0, 1.0, 1.0), SurfaceKind::Slick, &cfg)
            .build();
        assert_eq!(c.friction(), 0.0);
        assert_eq!(c.friction_combine_rule(), CoefficientCombineRule::Min);
        assert!((c.restitution() - 0.3).abs() < 1e-6);
    }
}
