use course_core::model::{ContentId, ContentItem, DocFormat, Documentation, VideoRef};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn position_to_i64(index: usize) -> Result<i64, StorageError> {
    i64::try_from(index).map_err(|_| StorageError::Serialization("position overflow".into()))
}

pub(crate) fn parse_doc_format(s: &str) -> Result<DocFormat, StorageError> {
    DocFormat::parse(s)
        .ok_or_else(|| StorageError::Serialization(format!("invalid doc_format: {s}")))
}

pub(crate) fn map_item_row(row: &SqliteRow) -> Result<ContentItem, StorageError> {
    let id = ContentId::new(row.try_get::<String, _>("id").map_err(ser)?).map_err(ser)?;
    let video = VideoRef::parse(row.try_get::<String, _>("video").map_err(ser)?).map_err(ser)?;
    let format = parse_doc_format(&row.try_get::<String, _>("doc_format").map_err(ser)?)?;
    let body: String = row.try_get("doc_body").map_err(ser)?;

    let item = ContentItem::new(
        id,
        row.try_get::<String, _>("title").map_err(ser)?,
        video,
        Documentation { format, body },
    )?;
    Ok(item)
}
