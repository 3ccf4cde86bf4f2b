//! Store tests against a private in-memory SQLite database.
//!
//! Verifies:
//! - Parent deletes cascade to signups
//! - Foreign keys reject dangling signups
//! - Detail loaders nest the right side of each relation

#[cfg(test)]
mod tests {
    use sqlx::{SqliteConnection, SqlitePool};

    use camp_core::{ActivityId, CamperId, Entity};
    use camp_roster::{NewActivity, NewCamper, NewSignup};

    use crate::repository::{activities, campers, signups};
    use crate::{DatabaseConfig, StoreError, db};

    async fn setup() -> SqlitePool {
        db::open(&DatabaseConfig::in_memory()).await.unwrap()
    }

    // The in-memory pool has a single connection, so counts go through the
    // connection the test already holds.
    async fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        n
    }

    async fn seed(pool: &SqlitePool) -> (CamperId, ActivityId, ActivityId) {
        let mut conn = pool.acquire().await.unwrap();
        let camper = campers::insert(&mut conn, NewCamper::new("Alex", 12).unwrap())
            .await
            .unwrap();
        let archery = activities::insert(&mut conn, NewActivity::new("Archery", 2))
            .await
            .unwrap();
        let canoe = activities::insert(&mut conn, NewActivity::new("Canoeing", 4))
            .await
            .unwrap();
        for hour in [9, 10, 11] {
            signups::insert(
                &mut conn,
                NewSignup::new(camper.id(), archery.id(), hour).unwrap(),
            )
            .await
            .unwrap();
        }
        signups::insert(&mut conn, NewSignup::new(camper.id(), canoe.id(), 14).unwrap())
            .await
            .unwrap();
        (camper.id(), archery.id(), canoe.id())
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = setup().await;
        db::ensure_schema(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        assert_eq!(count(&mut conn, "campers").await, 0);
    }

    #[tokio::test]
    async fn deleting_activity_cascades_to_its_signups() {
        let pool = setup().await;
        let (_, archery, canoe) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        assert_eq!(count(&mut conn, "signups").await, 4);

        assert!(activities::delete(&mut conn, archery).await.unwrap());

        assert_eq!(count(&mut conn, "signups").await, 1);
        assert!(activities::find(&mut conn, archery).await.unwrap().is_none());
        assert!(activities::find(&mut conn, canoe).await.unwrap().is_some());
        assert!(!activities::delete(&mut conn, archery).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_camper_cascades_to_its_signups() {
        let pool = setup().await;
        let (camper, _, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        sqlx::query("DELETE FROM campers WHERE id = ?")
            .bind(camper.get())
            .execute(&mut *conn)
            .await
            .unwrap();

        assert_eq!(count(&mut conn, "signups").await, 0);
        assert_eq!(count(&mut conn, "activities").await, 2);
    }

    #[tokio::test]
    async fn dangling_signup_is_a_foreign_key_error() {
        let pool = setup().await;
        let (camper, _, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let err = signups::insert(
            &mut conn,
            NewSignup::new(camper, ActivityId::new(999), 9).unwrap(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StoreError::ForeignKey(_)), "got {err:?}");
        assert_eq!(count(&mut conn, "signups").await, 4);
    }

    #[tokio::test]
    async fn camper_detail_lists_signups_with_activities() {
        let pool = setup().await;
        let (camper, archery, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let detail = campers::find_detail(&mut conn, camper).await.unwrap().unwrap();
        assert_eq!(detail.name, "Alex");
        assert_eq!(detail.signups.len(), 4);
        assert_eq!(detail.signups[0].time, 9);
        assert_eq!(detail.signups[0].activity.id, archery);
        assert_eq!(detail.signups[3].activity.name, "Canoeing");

        assert!(campers::find_detail(&mut conn, CamperId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn activity_listing_groups_signups_by_activity() {
        let pool = setup().await;
        let (camper, _, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let listed = activities::list_detailed(&mut conn).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].signups.len(), 3);
        assert_eq!(listed[1].signups.len(), 1);
        assert!(listed[0].signups.iter().all(|s| s.camper.id == camper));
    }

    #[tokio::test]
    async fn update_writes_back_fields() {
        let pool = setup().await;
        let (camper_id, _, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let mut camper = campers::find(&mut conn, camper_id).await.unwrap().unwrap();
        camper.set_name("Alexandra").unwrap();
        camper.set_age(13).unwrap();
        assert!(campers::update(&mut conn, &camper).await.unwrap());

        let reloaded = campers::list(&mut conn).await.unwrap();
        assert_eq!(reloaded, vec![camper]);
    }

    #[tokio::test]
    async fn signup_detail_nests_both_parents() {
        let pool = setup().await;
        let (camper, archery, _) = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let created = signups::insert(&mut conn, NewSignup::new(camper, archery, 16).unwrap())
            .await
            .unwrap();
        let detail = signups::find_detail(&mut conn, created.id()).await.unwrap().unwrap();
        assert_eq!(detail.time, 16);
        assert_eq!(detail.camper.name, "Alex");
        assert_eq!(detail.activity.name, "Archery");
    }
}
