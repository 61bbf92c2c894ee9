use std::collections::HashSet;

use chrono::Utc;
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};
use tracing::{error, info};

use crate::models::{Chapter, ChapterInput, CourseDetails, Interest, UpdateCourseRequest};

/// Reads the course, its chapters and its interests on one connection inside
/// a single read transaction, so the three results agree with each other.
pub async fn get_course_details(
    db: &SqlitePool,
    course_id: &str,
) -> Result<Option<CourseDetails>, sqlx::Error> {
    let mut tx = db.begin().await?;

    // Flat row: with several mappings the alphabetically first category is kept.
    let course = sqlx::query_as::<_, CourseDetails>(
        r#"
        SELECT
            c.id,
            c.title,
            c.description,
            c.imageUrl AS image_url,
            c.instructor,
            c.duration,
            c.level,
            c.status,
            ci.interestId AS interest_id,
            i.name AS category
        FROM course c
        LEFT JOIN courses_interests ci ON c.id = ci.courseId
        LEFT JOIN interest i ON i.id = ci.interestId
        WHERE c.id = ?
        ORDER BY i.name ASC
        LIMIT 1
        "#,
    )
    .bind(course_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut course) = course else {
        tx.commit().await?;
        return Ok(None);
    };
    course.chapters = fetch_chapters(&mut *tx, course_id).await?;
    course.categories = fetch_course_interests(&mut *tx, course_id).await?;
    tx.commit().await?;

    Ok(Some(course))
}

pub async fn fetch_chapters<'e, E>(db: E, course_id: &str) -> Result<Vec<Chapter>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Chapter>(
        r#"
        SELECT id, title, video_link, text_note, "order"
        FROM chapter
        WHERE course_id = ?
        ORDER BY "order" ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_course_interests<'e, E>(db: E, course_id: &str) -> Result<Vec<Interest>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Interest>(
        r#"
        SELECT i.id, i.name, i.icon
        FROM interest i
        JOIN courses_interests ci ON ci.interestId = i.id
        WHERE ci.courseId = ?
        ORDER BY i.name ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

/// Updates the course's scalar fields and, when categories are given,
/// creates missing interests and replaces the course's interest mappings.
/// Runs in a single transaction; nothing is written if any step fails.
pub async fn update_course_details(
    db: &SqlitePool,
    course_id: &str,
    req: &UpdateCourseRequest,
) -> Result<(), sqlx::Error> {
    let result = async {
        let mut tx = db.begin().await?;
        apply_course_update(&mut tx, course_id, req).await?;
        tx.commit().await
    }
    .await;

    if let Err(e) = &result {
        error!("Error updating course details for courseId {}: {}", course_id, e);
    }
    result
}

async fn apply_course_update(
    conn: &mut SqliteConnection,
    course_id: &str,
    req: &UpdateCourseRequest,
) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        UPDATE course
        SET title = ?, description = ?, imageUrl = ?, status = ?, updatedAt = ?
        WHERE id = ?
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(&req.status)
    .bind(&now)
    .bind(course_id)
    .execute(&mut *conn)
    .await?;

    let Some(categories) = &req.categories else {
        return Ok(());
    };

    if !categories.is_empty() {
        let mut known: HashSet<String> = sqlx::query_scalar::<_, String>("SELECT name FROM interest")
            .fetch_all(&mut *conn)
            .await?
            .into_iter()
            .collect();

        for category in categories {
            if known.contains(&category.name) {
                continue;
            }
            sqlx::query(
                r#"
                INSERT INTO interest (id, name, createdAt, updatedAt, icon)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&category.id)
            .bind(&category.name)
            .bind(&now)
            .bind(&now)
            .bind(&category.icon)
            .execute(&mut *conn)
            .await?;
            known.insert(category.name.clone());
        }
    }

    sqlx::query("DELETE FROM courses_interests WHERE courseId = ?")
        .bind(course_id)
        .execute(&mut *conn)
        .await?;

    for category in categories {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO courses_interests (courseId, interestId)
            SELECT ?, id FROM interest WHERE name = ?
            "#,
        )
        .bind(course_id)
        .bind(&category.name)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Upserts each chapter by (course_id, id), in order, inside one transaction.
pub async fn update_chapters(
    db: &SqlitePool,
    course_id: &str,
    chapters: &[ChapterInput],
) -> Result<(), sqlx::Error> {
    let mut tx = db.begin().await.map_err(|e| {
        error!("Error updating chapters for courseId {}: {}", course_id, e);
        e
    })?;

    for chapter in chapters {
        if let Err(e) = upsert_chapter(&mut tx, course_id, chapter).await {
            error!(
                "Error updating chapter {} (title {}) for courseId {}: {}",
                chapter.id,
                chapter.title.as_deref().unwrap_or("<none>"),
                course_id,
                e
            );
            return Err(e);
        }
    }

    tx.commit().await.map_err(|e| {
        error!("Error updating chapters for courseId {}: {}", course_id, e);
        e
    })
}

async fn upsert_chapter(
    conn: &mut SqliteConnection,
    course_id: &str,
    chapter: &ChapterInput,
) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM chapter WHERE course_id = ? AND id = ?",
    )
    .bind(course_id)
    .bind(&chapter.id)
    .fetch_one(&mut *conn)
    .await?;

    if count > 0 {
        info!("Updating chapter with id {} for courseId {}", chapter.id, course_id);
        sqlx::query(
            r#"
            UPDATE chapter
            SET title = ?, video_link = ?, text_note = ?, "order" = ?, updatedAt = ?
            WHERE course_id = ? AND id = ?
            "#,
        )
        .bind(&chapter.title)
        .bind(&chapter.video_link)
        .bind(&chapter.text_note)
        .bind(chapter.order)
        .bind(&now)
        .bind(course_id)
        .bind(&chapter.id)
        .execute(&mut *conn)
        .await?;
    } else {
        info!("Inserting new chapter with id {} for courseId {}", chapter.id, course_id);
        sqlx::query(
            r#"
            INSERT INTO chapter
                (id, course_id, title, video_link, text_note, "order", createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&chapter.id)
        .bind(course_id)
        .bind(&chapter.title)
        .bind(&chapter.video_link)
        .bind(&chapter.text_note)
        .bind(chapter.order)
        .bind(&now)
        .bind(&now)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
