use std::collections::BTreeMap;

use sqlx::SqliteConnection;

use camp_core::{ActivityId, CamperId, Entity, SignupId};
use camp_roster::{Activity, ActivityDetail, ActivitySignup, Camper, NewActivity, Signup};

use crate::StoreError;

type ActivityRow = (i64, String, i64);
type ActivitySignupRow = (i64, i64, i64, i64, String, i64);

fn activity_from_row((id, name, difficulty): ActivityRow) -> Activity {
    Activity::restore(ActivityId::new(id), name, difficulty)
}

pub async fn find(
    conn: &mut SqliteConnection,
    id: ActivityId,
) -> Result<Option<Activity>, StoreError> {
    let row: Option<ActivityRow> =
        sqlx::query_as("SELECT id, name, difficulty FROM activities WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;
    Ok(row.map(activity_from_row))
}

/// Every activity with its signups (each carrying its camper), in id order.
pub async fn list_detailed(conn: &mut SqliteConnection) -> Result<Vec<ActivityDetail>, StoreError> {
    let activities: Vec<ActivityRow> =
        sqlx::query_as("SELECT id, name, difficulty FROM activities ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

    let signup_rows: Vec<ActivitySignupRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.time, s.activity_id, c.id, c.name, c.age
        FROM signups s
        JOIN campers c ON c.id = s.camper_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    let mut by_activity: BTreeMap<i64, Vec<ActivitySignup>> = BTreeMap::new();
    for (signup_id, time, activity_id, camper_id, name, age) in signup_rows {
        let signup = Signup::restore(
            SignupId::new(signup_id),
            CamperId::new(camper_id),
            ActivityId::new(activity_id),
            time,
        );
        let camper = Camper::restore(CamperId::new(camper_id), name, age);
        by_activity
            .entry(activity_id)
            .or_default()
            .push(ActivitySignup::new(&signup, &camper));
    }

    Ok(activities
        .into_iter()
        .map(activity_from_row)
        .map(|activity| {
            let signups = by_activity.remove(&activity.id().get()).unwrap_or_default();
            ActivityDetail::new(&activity, signups)
        })
        .collect())
}

pub async fn insert(
    conn: &mut SqliteConnection,
    draft: NewActivity,
) -> Result<Activity, StoreError> {
    let result = sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
        .bind(&draft.name)
        .bind(draft.difficulty)
        .execute(&mut *conn)
        .await?;
    Ok(draft.into_activity(ActivityId::new(result.last_insert_rowid())))
}

/// Delete the activity; its signups go with it via `ON DELETE CASCADE`.
/// Returns whether a row matched.
pub async fn delete(conn: &mut SqliteConnection, id: ActivityId) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?")
        .bind(id.get())
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
