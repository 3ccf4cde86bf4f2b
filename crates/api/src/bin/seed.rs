//! Reset the store and fill it with a small sample roster.
//!
//! Activities have no HTTP creation endpoint; this is how they get in.

use anyhow::Context;

use camp_core::Entity;
use camp_infra::repository::{activities, campers, signups};
use camp_infra::{AppConfig, db};
use camp_roster::{NewActivity, NewCamper, NewSignup};

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Rock Climbing", 5),
    ("Swimming", 1),
    ("Arts and Crafts", 1),
];

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 12),
    ("Ava", 15),
    ("Zoe", 18),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    camp_observability::init();

    let config = AppConfig::from_env()?;
    let pool = db::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.url))?;

    let mut tx = pool.begin().await?;

    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to clear {table}"))?;
    }

    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let activity = activities::insert(&mut tx, NewActivity::new(*name, *difficulty)).await?;
        activity_ids.push(activity.id());
    }

    let mut signup_count = 0;
    for (i, (name, age)) in CAMPERS.iter().enumerate() {
        let camper = campers::insert(&mut tx, NewCamper::new(*name, *age)?).await?;

        // Two signups each, spread over the morning.
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset) % activity_ids.len()];
            let hour = 9 + (i as i64 + offset as i64 * 3) % 8;
            signups::insert(&mut tx, NewSignup::new(camper.id(), activity_id, hour)?).await?;
            signup_count += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(
        activities = activity_ids.len(),
        campers = CAMPERS.len(),
        signups = signup_count,
        "seed complete"
    );
    Ok(())
}
