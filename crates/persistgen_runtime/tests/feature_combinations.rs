//! Audit and soft delete are independent: every combination generates exactly its own members.

use persistgen_runtime::{DateTime, Utc, managed};

mod plain {
    use super::*;

    #[managed]
    #[derive(Debug, Clone)]
    pub struct Note {
        #[persisted(set_all_actions)]
        _body: String,
    }

    #[test]
    fn only_field_copies() {
        let mut working = Note::default();
        working.set_body("hello".to_string());

        assert_eq!(working.map_to_authority_insert(Note::default()).body(), "hello");
        assert_eq!(working.map_to_authority_update(Note::default()).body(), "hello");
        assert_eq!(working.map_to_authority_delete(Note::default()).body(), "hello");
    }
}

mod audit_only {
    use super::*;

    #[managed(enable_audit)]
    #[derive(Debug, Clone)]
    pub struct Invoice {
        #[persisted(set_on_update)]
        _total: u64,
    }

    #[test]
    fn stamps_insert_and_update() {
        let mut working = Invoice::default();
        working.set_total(12);
        working.created_by = "alice".to_string();
        working.modified_last_by = Some("bob".to_string());

        let inserted = working.map_to_authority_insert(Invoice::default());
        assert_eq!(*inserted.total(), 0);
        assert_eq!(inserted.created_by, "alice");
        assert_eq!(inserted.modified_last_date, None);

        let updated = working.map_to_authority_update(inserted);
        assert_eq!(*updated.total(), 12);
        assert!(updated.modified_last_date.is_some());
        assert_eq!(updated.modified_last_by.as_deref(), Some("bob"));

        let deleted = working.map_to_authority_delete(Invoice::default());
        assert_eq!(*deleted.total(), 0);
    }
}

mod soft_delete_only {
    use super::*;

    #[managed(enable_soft_delete = true)]
    #[derive(Debug, Clone)]
    pub struct Tag {
        #[persisted(set_on_insert)]
        _label: String,
    }

    #[test]
    fn delete_sets_flag_and_stamp() {
        let mut working = Tag::default();
        working.deleted_by = Some("mod".to_string());

        let deleted = working.map_to_authority_delete(Tag::default());
        assert!(deleted.is_deleted);
        let stamped: DateTime<Utc> = deleted.deleted_date.unwrap_or_default();
        assert!(stamped > DateTime::<Utc>::default());
        assert_eq!(deleted.deleted_by.as_deref(), Some("mod"));
    }
}

mod both {
    use super::*;

    #[managed(enable_audit = true, enable_soft_delete = true)]
    #[derive(Debug, Clone)]
    pub struct Account {
        #[persisted(set_on_insert, property_name = "Handle")]
        _h: String,
        #[persisted(set_on_delete)]
        _closedReason: Option<String>,
    }

    #[test]
    fn all_members_present() {
        let mut working = Account::default();
        working.set_handle("@a".to_string());
        working.set_closed_reason(Some("spam".to_string()));
        working.created_by = "sys".to_string();

        let inserted = working.map_to_authority_insert(Account::default());
        assert_eq!(inserted.handle(), "@a");
        assert_eq!(inserted.closed_reason(), &None);
        assert_eq!(inserted.created_by, "sys");

        let deleted = working.map_to_authority_delete(inserted);
        assert!(deleted.is_deleted);
        assert_eq!(deleted.closed_reason().as_deref(), Some("spam"));
        assert_eq!(deleted.handle(), "@a");
    }
}

mod keywords_and_visibility {
    use super::*;

    #[managed]
    #[derive(Debug, Clone, Default)]
    pub(crate) struct Shape {
        #[persisted(set_on_insert)]
        r#type: String,
        #[persisted(set_all_actions = true, set_on_delete = false)]
        _z: i32,
    }

    #[test]
    fn keyword_fields_are_escaped() {
        let mut working = Shape::default();
        working.set_type("circle".to_string());
        working.set_z(3);

        let inserted = working.map_to_authority_insert(Shape::default());
        assert_eq!(inserted.r#type(), "circle");
        assert_eq!(*inserted.z(), 3);

        let deleted = working.map_to_authority_delete(Shape::default());
        assert_eq!(*deleted.z(), 0);
    }
}
