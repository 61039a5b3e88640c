//! Tests for damage application.

#[cfg(test)]
mod tests {
    use super::super::damage::{apply_damage, apply_hit, DamageDealt};
    use crate::companion::PlayerKilled;
    use crate::components::Health;
    use bevy::prelude::*;

    #[test]
    fn test_bite_damage() {
        let mut health = Health::new(100);

        assert!(!apply_hit(&mut health, 25));
        assert_eq!(health.current, 75);
    }

    #[test]
    fn test_killing_blow_reported_once() {
        let mut health = Health::new(50);

        assert!(!apply_hit(&mut health, 25));
        assert!(apply_hit(&mut health, 25));
        assert!(!health.is_alive());

        // Добивание трупа — не новая смерть
        assert!(!apply_hit(&mut health, 25));
    }

    #[derive(Resource, Default)]
    struct Kills(Vec<PlayerKilled>);

    fn collect_kills(mut reader: EventReader<PlayerKilled>, mut kills: ResMut<Kills>) {
        kills.0.extend(reader.read().copied());
    }

    fn damage_app() -> App {
        let mut app = App::new();
        app.add_event::<DamageDealt>()
            .add_event::<PlayerKilled>()
            .init_resource::<Kills>()
            .add_systems(Update, (apply_damage, collect_kills).chain());
        app
    }

    #[test]
    fn test_killing_blow_emits_single_player_killed() {
        let mut app = damage_app();
        let attacker = app.world_mut().spawn_empty().id();
        let victim = app.world_mut().spawn(Health::new(30)).id();

        // Второй укус в том же тике бьёт уже по трупу
        for _ in 0..2 {
            app.world_mut().send_event(DamageDealt { attacker, target: victim, damage: 25 });
        }
        app.update();

        app.world_mut().send_event(DamageDealt { attacker, target: victim, damage: 25 });
        app.update();

        assert_eq!(app.world().get::<Health>(victim).map(|h| h.current), Some(0));
        assert_eq!(
            app.world().resource::<Kills>().0,
            vec![PlayerKilled { victim, attacker: Some(attacker) }]
        );
    }

    #[test]
    fn test_damage_without_health_is_ignored() {
        let mut app = damage_app();
        let attacker = app.world_mut().spawn_empty().id();
        let barrel = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(DamageDealt { attacker, target: barrel, damage: 25 });
        app.update();

        assert!(app.world().resource::<Kills>().0.is_empty());
    }
}
