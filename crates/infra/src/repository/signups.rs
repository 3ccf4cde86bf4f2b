use sqlx::SqliteConnection;

use camp_core::{ActivityId, CamperId, SignupId};
use camp_roster::{Activity, Camper, NewSignup, Signup, SignupDetail};

use crate::StoreError;

type SignupDetailRow = (i64, i64, i64, String, i64, i64, String, i64);

/// Insert a validated signup.
///
/// A missing camper or activity surfaces as [`StoreError::ForeignKey`].
pub async fn insert(conn: &mut SqliteConnection, draft: NewSignup) -> Result<Signup, StoreError> {
    let result = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?)")
        .bind(draft.time())
        .bind(draft.camper_id().get())
        .bind(draft.activity_id().get())
        .execute(&mut *conn)
        .await?;
    Ok(draft.into_signup(SignupId::new(result.last_insert_rowid())))
}

pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: SignupId,
) -> Result<Option<SignupDetail>, StoreError> {
    let row: Option<SignupDetailRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.time,
               c.id, c.name, c.age,
               a.id, a.name, a.difficulty
        FROM signups s
        JOIN campers c ON c.id = s.camper_id
        JOIN activities a ON a.id = s.activity_id
        WHERE s.id = ?
        "#,
    )
    .bind(id.get())
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(
        |(signup_id, time, c_id, c_name, c_age, a_id, a_name, a_difficulty)| {
            let camper = Camper::restore(CamperId::new(c_id), c_name, c_age);
            let activity = Activity::restore(ActivityId::new(a_id), a_name, a_difficulty);
            let signup = Signup::restore(
                SignupId::new(signup_id),
                CamperId::new(c_id),
                ActivityId::new(a_id),
                time,
            );
            SignupDetail::new(&signup, &camper, &activity)
        },
    ))
}
