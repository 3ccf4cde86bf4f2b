use sqlx::SqliteConnection;

use camp_core::{ActivityId, CamperId, Entity, SignupId};
use camp_roster::{Activity, Camper, CamperDetail, CamperSignup, NewCamper, Signup};

use crate::StoreError;

type CamperRow = (i64, String, i64);
type CamperSignupRow = (i64, i64, i64, String, i64);

fn camper_from_row((id, name, age): CamperRow) -> Camper {
    Camper::restore(CamperId::new(id), name, age)
}

/// All campers in id order.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Camper>, StoreError> {
    let rows: Vec<CamperRow> = sqlx::query_as("SELECT id, name, age FROM campers ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.into_iter().map(camper_from_row).collect())
}

pub async fn find(conn: &mut SqliteConnection, id: CamperId) -> Result<Option<Camper>, StoreError> {
    let row: Option<CamperRow> = sqlx::query_as("SELECT id, name, age FROM campers WHERE id = ?")
        .bind(id.get())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(camper_from_row))
}

/// The camper with its signups, each carrying its activity.
pub async fn find_detail(
    conn: &mut SqliteConnection,
    id: CamperId,
) -> Result<Option<CamperDetail>, StoreError> {
    let Some(camper) = find(conn, id).await? else {
        return Ok(None);
    };
    let signups = signups_of(conn, &camper).await?;
    Ok(Some(CamperDetail::new(&camper, signups)))
}

async fn signups_of(
    conn: &mut SqliteConnection,
    camper: &Camper,
) -> Result<Vec<CamperSignup>, StoreError> {
    let rows: Vec<CamperSignupRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.time, a.id, a.name, a.difficulty
        FROM signups s
        JOIN activities a ON a.id = s.activity_id
        WHERE s.camper_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(camper.id().get())
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(signup_id, time, activity_id, name, difficulty)| {
            let signup = Signup::restore(
                SignupId::new(signup_id),
                camper.id(),
                ActivityId::new(activity_id),
                time,
            );
            let activity = Activity::restore(ActivityId::new(activity_id), name, difficulty);
            CamperSignup::new(&signup, &activity)
        })
        .collect())
}

pub async fn insert(conn: &mut SqliteConnection, draft: NewCamper) -> Result<Camper, StoreError> {
    let result = sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
        .bind(draft.name())
        .bind(draft.age())
        .execute(&mut *conn)
        .await?;
    Ok(draft.into_camper(CamperId::new(result.last_insert_rowid())))
}

/// Write back `name` and `age`. Returns whether a row matched.
pub async fn update(conn: &mut SqliteConnection, camper: &Camper) -> Result<bool, StoreError> {
    let result = sqlx::query("UPDATE campers SET name = ?, age = ? WHERE id = ?")
        .bind(camper.name())
        .bind(camper.age())
        .bind(camper.id().get())
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
