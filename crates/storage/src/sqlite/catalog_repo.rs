use std::collections::HashMap;

use course_core::model::{Catalog, ContentItem, Course, CourseId, Topic, TopicId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, map_item_row, position_to_i64, ser};
use crate::repository::{CatalogRepository, StorageError};

#[async_trait::async_trait]
impl CatalogRepository for SqliteRepository {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let course_rows = sqlx::query(
            r"
            SELECT id, title
            FROM courses
            ORDER BY position ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let topic_rows = sqlx::query(
            r"
            SELECT id, course_id, title
            FROM topics
            ORDER BY course_id ASC, position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let item_rows = sqlx::query(
            r"
            SELECT topic_id, id, title, video, doc_format, doc_body
            FROM content_items
            ORDER BY topic_id ASC, position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut items_by_topic: HashMap<String, Vec<ContentItem>> = HashMap::new();
        for row in &item_rows {
            let topic_id: String = row.try_get("topic_id").map_err(ser)?;
            items_by_topic
                .entry(topic_id)
                .or_default()
                .push(map_item_row(row)?);
        }

        let mut topics_by_course: HashMap<String, Vec<Topic>> = HashMap::new();
        for row in &topic_rows {
            let id: String = row.try_get("id").map_err(ser)?;
            let course_id: String = row.try_get("course_id").map_err(ser)?;
            let title: String = row.try_get("title").map_err(ser)?;
            let items = items_by_topic.remove(&id).unwrap_or_default();
            let topic = Topic::new(TopicId::new(id).map_err(ser)?, title, items)?;
            topics_by_course.entry(course_id).or_default().push(topic);
        }

        let mut courses = Vec::with_capacity(course_rows.len());
        for row in &course_rows {
            let id: String = row.try_get("id").map_err(ser)?;
            let title: String = row.try_get("title").map_err(ser)?;
            let topics = topics_by_course.remove(&id).unwrap_or_default();
            courses.push(Course::new(CourseId::new(id).map_err(ser)?, title, topics)?);
        }

        Ok(Catalog::new(courses)?)
    }

    async fn replace_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;

        // Children first; cascades are not relied on for the wipe.
        for statement in [
            "DELETE FROM content_items",
            "DELETE FROM topics",
            "DELETE FROM courses",
        ] {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
        }

        for (course_pos, course) in catalog.courses().iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO courses (id, title, position)
                VALUES (?1, ?2, ?3)
                ",
            )
            .bind(course.id().as_str())
            .bind(course.title())
            .bind(position_to_i64(course_pos)?)
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

            for (topic_pos, topic) in course.topics().iter().enumerate() {
                sqlx::query(
                    r"
                    INSERT INTO topics (id, course_id, title, position)
                    VALUES (?1, ?2, ?3, ?4)
                    ",
                )
                .bind(topic.id().as_str())
                .bind(course.id().as_str())
                .bind(topic.title())
                .bind(position_to_i64(topic_pos)?)
                .execute(&mut *tx)
                .await
                .map_err(conn)?;

                for (item_pos, item) in topic.items().iter().enumerate() {
                    let doc = item.documentation();
                    sqlx::query(
                        r"
                        INSERT INTO content_items
                            (topic_id, id, title, video, doc_format, doc_body, position)
                        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                        ",
                    )
                    .bind(topic.id().as_str())
                    .bind(item.id().as_str())
                    .bind(item.title())
                    .bind(item.video().to_src())
                    .bind(doc.format.as_str())
                    .bind(doc.body.as_str())
                    .bind(position_to_i64(item_pos)?)
                    .execute(&mut *tx)
                    .await
                    .map_err(conn)?;
                }
            }
        }

        tx.commit().await.map_err(conn)?;
        Ok(())
    }
}
