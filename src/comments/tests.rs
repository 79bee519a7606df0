//! Comments Module Tests
//!
//! ## Test Scopes
//! - **CommentId**: parsing from path text and JSON values.
//! - **CommentService**: add/update/delete/list against a temp document,
//!   including the "failure leaves storage untouched" guarantees and
//!   concurrent writers.

#[cfg(test)]
mod tests {
    use crate::comments::service::{CommentError, CommentService};
    use crate::comments::types::{CommentId, CommentRecord};
    use crate::storage::{JsonDocument, StoreError};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service_with(dir: &TempDir, content: &str) -> CommentService {
        let path = dir.path().join("Data.json");
        std::fs::write(&path, content).unwrap();
        CommentService::new(JsonDocument::new(path))
    }

    fn raw(service: &CommentService) -> String {
        std::fs::read_to_string(service.document_path()).unwrap()
    }

    fn record(id: i64, comment: &str) -> CommentRecord {
        CommentRecord::new(CommentId(id), comment)
    }

    const THREE: &str = r#"[
        {"id": 1, "comment": "one"},
        {"id": 2, "comment": "two"},
        {"id": 3, "comment": "three"}
    ]"#;

    // ============================================================
    // COMMENT ID
    // ============================================================

    #[test]
    fn test_comment_id_parses_integer_text() {
        assert_eq!("42".parse::<CommentId>().unwrap(), CommentId(42));
        assert_eq!("-7".parse::<CommentId>().unwrap(), CommentId(-7));
        assert_eq!(" 5 ".parse::<CommentId>().unwrap(), CommentId(5));
    }

    #[test]
    fn test_comment_id_accepts_integral_decimal_text() {
        assert_eq!("2.0".parse::<CommentId>().unwrap(), CommentId(2));
    }

    #[test]
    fn test_comment_id_rejects_non_numeric_text() {
        for bad in ["abc", "1.5", "", "NaN", "inf", "1e400", "12abc"] {
            assert!(bad.parse::<CommentId>().is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_comment_id_from_json() {
        assert_eq!(
            CommentId::from_json(&serde_json::json!(9)),
            Some(CommentId(9))
        );
        assert_eq!(
            CommentId::from_json(&serde_json::json!(9.0)),
            Some(CommentId(9))
        );
        assert_eq!(CommentId::from_json(&serde_json::json!(9.5)), None);
        assert_eq!(CommentId::from_json(&serde_json::json!("9")), None);
        assert_eq!(CommentId::from_json(&serde_json::json!(u64::MAX)), None);
        assert_eq!(CommentId::from_json(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_comment_id_deserializes_like_request_ids() {
        let parse = |raw: &str| serde_json::from_str::<CommentId>(raw);

        assert_eq!(parse("7").unwrap(), CommentId(7));
        assert_eq!(parse("7.0").unwrap(), CommentId(7));
        assert!(parse("7.5").is_err());
        assert!(parse("\"7\"").is_err());
        assert!(parse("18446744073709551615").is_err());
    }

    #[test]
    fn test_invalid_comment_id_message() {
        let err = "abc".parse::<CommentId>().unwrap_err();
        assert_eq!(err.to_string(), "not a numeric id: \"abc\"");
    }

    // ============================================================
    // SERVICE
    // ============================================================

    #[tokio::test]
    async fn test_add_then_list_contains_record() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, "[]");

        service.add(record(10, "hello")).await.unwrap();

        let records = service.list().await.unwrap();
        assert!(records.contains(&record(10, "hello")));
    }

    #[tokio::test]
    async fn test_add_appends_at_end() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);

        service.add(record(0, "zero")).await.unwrap();

        let ids: Vec<i64> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 0]);
    }

    #[tokio::test]
    async fn test_add_duplicate_conflicts_and_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);
        let before = raw(&service);

        let err = service.add(record(2, "again")).await.unwrap_err();

        assert!(matches!(err, CommentError::Conflict(CommentId(2))));
        assert_eq!(raw(&service), before);
    }

    #[tokio::test]
    async fn test_update_changes_only_target_comment() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);

        service.update(CommentId(2), "TWO".to_string()).await.unwrap();

        assert_eq!(
            service.list().await.unwrap(),
            vec![record(1, "one"), record(2, "TWO"), record(3, "three")]
        );
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found_and_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);
        let before = raw(&service);

        let err = service
            .update(CommentId(99), "nope".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::NotFound(CommentId(99))));
        assert_eq!(raw(&service), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_keeps_order() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);

        let removed = service.delete(CommentId(2)).await.unwrap();

        assert_eq!(removed, record(2, "two"));
        assert_eq!(
            service.list().await.unwrap(),
            vec![record(1, "one"), record(3, "three")]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found_and_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);
        let before = raw(&service);

        let err = service.delete(CommentId(42)).await.unwrap_err();

        assert!(matches!(err, CommentError::NotFound(CommentId(42))));
        assert_eq!(raw(&service), before);
    }

    #[tokio::test]
    async fn test_add_then_delete_restores_original_sequence() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, THREE);
        let original = service.list().await.unwrap();

        service.add(record(4, "four")).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 4);
        service.delete(CommentId(4)).await.unwrap();

        assert_eq!(service.list().await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_corrupt_document_surfaces_store_error() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, "not json");

        let err = service.add(record(1, "x")).await.unwrap_err();

        assert!(matches!(
            err,
            CommentError::Store(StoreError::Malformed { .. })
        ));
        assert_eq!(raw(&service), "not json");
    }

    #[tokio::test]
    async fn test_concurrent_adds_do_not_lose_updates() {
        let dir = TempDir::new().unwrap();
        let service = Arc::new(service_with(&dir, "[]"));

        let mut handles = Vec::new();
        for i in 0..32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.add(record(i, &format!("comment {}", i))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<i64> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        ids.sort();
        assert_eq!(ids, (0..32).collect::<Vec<_>>());
    }
}
