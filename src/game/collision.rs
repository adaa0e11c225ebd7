use crate::game::alien::Alien;
use crate::game::bounds::Bounds;
use crate::game::bullet::Bullet;

/// Remove every bullet that overlaps a live alien together with that alien.
/// A bullet takes out at most one alien, the first it overlaps in fleet
/// order; a bullet whose only targets were already claimed keeps flying.
///
/// Returns the number of aliens destroyed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let mut dead = vec![false; aliens.len()];
    let mut destroyed = 0;

    bullets.retain(|bullet| {
        let hit = aliens
            .iter()
            .enumerate()
            .position(|(i, alien)| !dead[i] && bullet.bounds.overlaps(&alien.bounds));
        match hit {
            Some(i) => {
                dead[i] = true;
                destroyed += 1;
                false
            }
            None => true,
        }
    });

    if destroyed > 0 {
        let mut i = 0;
        aliens.retain(|_| {
            let keep = !dead[i];
            i += 1;
            keep
        });
    }
    destroyed
}

pub fn any_alien_overlaps(target: &Bounds, aliens: &[Alien]) -> bool {
    aliens.iter().any(|a| a.bounds.overlaps(target))
}

pub fn any_alien_at_bottom(aliens: &[Alien], screen_height: f32) -> bool {
    aliens.iter().any(|a| a.bounds.bottom() >= screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet_at(x: f32, y: f32) -> Bullet {
        Bullet {
            bounds: Bounds::new(x, y, 3.0, 15.0),
        }
    }

    #[test]
    fn one_bullet_one_alien() {
        let mut bullets = vec![bullet_at(80.0, 80.0), bullet_at(500.0, 500.0)];
        let mut aliens = vec![Alien::new(60.0, 58.0, 60.0, 58.0), Alien::new(180.0, 58.0, 60.0, 58.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut aliens), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].bounds.x, 180.0);
    }

    #[test]
    fn bullet_spanning_two_aliens_kills_only_one() {
        // tall bullet overlapping two stacked aliens
        let mut bullets = vec![Bullet {
            bounds: Bounds::new(80.0, 100.0, 3.0, 100.0),
        }];
        let mut aliens = vec![Alien::new(60.0, 58.0, 60.0, 58.0), Alien::new(60.0, 150.0, 60.0, 58.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut aliens), 1);
        assert!(bullets.is_empty());
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].bounds.y, 150.0);
    }

    #[test]
    fn second_bullet_on_claimed_alien_survives() {
        let mut bullets = vec![bullet_at(80.0, 80.0), bullet_at(90.0, 80.0)];
        let mut aliens = vec![Alien::new(60.0, 58.0, 60.0, 58.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut aliens), 1);
        assert_eq!(bullets.len(), 1);
        assert!(aliens.is_empty());
    }

    #[test]
    fn misses_change_nothing() {
        let mut bullets = vec![bullet_at(10.0, 700.0)];
        let mut aliens = vec![Alien::new(60.0, 58.0, 60.0, 58.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut aliens), 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(aliens.len(), 1);
    }

    #[test]
    fn bottom_contact_is_inclusive() {
        let aliens = vec![Alien::new(0.0, 742.0, 60.0, 58.0)];
        assert!(any_alien_at_bottom(&aliens, 800.0));
        assert!(!any_alien_at_bottom(&aliens, 800.5));
    }
}
