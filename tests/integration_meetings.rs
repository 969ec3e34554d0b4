mod common;

use common::{TestOrg, store_with};
use sekolah::access::{
    Dataset, InMemoryStore, MeetingStore, ProfileStore, can_edit_or_delete_meeting,
};
use sekolah::models::{MeetingId, MeetingOrgChain, TeacherClass, UserId};
use sekolah::{Role, StoreError, UserProfile};

#[tokio::test]
async fn test_creator_can_edit_own_meeting() {
    let org = TestOrg::new();
    let teacher = org.at_kelompok_a1x(Role::Teacher);
    let meeting = org.meeting_in_a1x(teacher.id, false);
    let store = store_with(&[teacher.clone()], &[meeting.clone()], &[]);

    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, teacher.id).await);
}

#[tokio::test]
async fn test_creator_wins_regardless_of_role() {
    let org = TestOrg::new();
    let student = org.student_user();
    let meeting = org.meeting_in_a1x(student.id, true);
    let store = store_with(&[student.clone()], &[meeting.clone()], &[]);

    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, student.id).await);
}

#[tokio::test]
async fn test_superadmin_can_edit_any_meeting() {
    let org = TestOrg::new();
    let superadmin = org.superadmin();
    let meeting = org.meeting_in_a1x(UserId::new(), false);
    let store = store_with(&[superadmin.clone()], &[meeting.clone()], &[]);

    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, superadmin.id).await);
}

#[tokio::test]
async fn test_admin_scope_covers_meeting() {
    let org = TestOrg::new();
    let meeting = org.meeting_in_a1x(UserId::new(), true);

    let daerah_admin = org.at_daerah_a(Role::Admin);
    let desa_admin = org.at_desa_a1(Role::Admin);
    let kelompok_admin = org.at_kelompok_a1x(Role::Admin);
    let other_desa_admin = org.at_daerah_a(Role::Admin).with_desa(org.desa_a2);
    let other_daerah_admin = UserProfile::new(UserId::new(), Role::Admin).with_daerah(org.daerah_b);

    let store = store_with(
        &[
            daerah_admin.clone(),
            desa_admin.clone(),
            kelompok_admin.clone(),
            other_desa_admin.clone(),
            other_daerah_admin.clone(),
        ],
        &[meeting.clone()],
        &[],
    );

    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, daerah_admin.id).await);
    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, desa_admin.id).await);
    assert!(can_edit_or_delete_meeting(&store, &store, meeting.id, kelompok_admin.id).await);
    assert!(!can_edit_or_delete_meeting(&store, &store, meeting.id, other_desa_admin.id).await);
    assert!(!can_edit_or_delete_meeting(&store, &store, meeting.id, other_daerah_admin.id).await);
}

#[tokio::test]
async fn test_shared_class_is_not_enough() {
    let org = TestOrg::new();
    let creator = org.at_kelompok_a1x(Role::Teacher);
    let colleague = org.at_kelompok_a1x(Role::Teacher);
    let meeting = org.meeting_in_a1x(creator.id, false);
    let store = store_with(
        &[creator.clone(), colleague.clone()],
        &[meeting.clone()],
        &[
            TeacherClass {
                teacher_id: creator.id,
                class_id: org.class_a1x,
            },
            TeacherClass {
                teacher_id: colleague.id,
                class_id: org.class_a1x,
            },
        ],
    );

    assert!(!can_edit_or_delete_meeting(&store, &store, meeting.id, colleague.id).await);
}

#[tokio::test]
async fn test_hierarchical_teacher_cannot_edit_others_meeting() {
    let org = TestOrg::new();
    let desa_teacher = org.at_desa_a1(Role::Teacher);
    let meeting = org.meeting_in_a1x(UserId::new(), false);
    let store = store_with(&[desa_teacher.clone()], &[meeting.clone()], &[]);

    assert!(!can_edit_or_delete_meeting(&store, &store, meeting.id, desa_teacher.id).await);
}

#[tokio::test]
async fn test_missing_records_deny() {
    let org = TestOrg::new();
    let superadmin = org.superadmin();
    let meeting = org.meeting_in_a1x(superadmin.id, false);
    let store = store_with(&[superadmin.clone()], &[meeting.clone()], &[]);

    assert!(!can_edit_or_delete_meeting(&store, &store, MeetingId::new(), superadmin.id).await);
    assert!(!can_edit_or_delete_meeting(&store, &store, meeting.id, UserId::new()).await);
}

struct BrokenStore;

impl ProfileStore for BrokenStore {
    async fn get_profile_by_id(&self, _user_id: UserId) -> Result<Option<UserProfile>, StoreError> {
        Err(StoreError::backend("profiles unavailable"))
    }
}

impl MeetingStore for BrokenStore {
    async fn get_meeting_with_org_chain(
        &self,
        _meeting_id: MeetingId,
    ) -> Result<Option<MeetingOrgChain>, StoreError> {
        Err(StoreError::backend("meetings unavailable"))
    }
}

#[tokio::test]
async fn test_store_errors_deny() {
    let org = TestOrg::new();
    let superadmin = org.superadmin();
    let meeting = org.meeting_in_a1x(superadmin.id, false);
    let store = store_with(&[superadmin.clone()], &[meeting.clone()], &[]);

    assert!(!can_edit_or_delete_meeting(&BrokenStore, &store, meeting.id, superadmin.id).await);
    assert!(!can_edit_or_delete_meeting(&store, &BrokenStore, meeting.id, superadmin.id).await);
}

#[tokio::test]
async fn test_decision_is_idempotent() {
    let org = TestOrg::new();
    let admin = org.at_desa_a1(Role::Admin);
    let meeting = org.meeting_in_a1x(UserId::new(), true);
    let store = store_with(&[admin.clone()], &[meeting.clone()], &[]);

    let first = can_edit_or_delete_meeting(&store, &store, meeting.id, admin.id).await;
    let second = can_edit_or_delete_meeting(&store, &store, meeting.id, admin.id).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dataset_with_mixed_join_shapes() {
    let org = TestOrg::new();
    let kelompok_admin = org.at_kelompok_a1x(Role::Admin);
    let object_join = org.meeting_in_a1x(UserId::new(), false);
    let array_join = org.meeting_in_a1x(UserId::new(), true);

    let dataset = Dataset {
        profiles: vec![kelompok_admin.clone()],
        meetings: vec![object_join.clone(), array_join.clone()],
        ..Default::default()
    };
    let json = serde_json::to_string(&dataset).unwrap();
    let store = InMemoryStore::from_dataset(Dataset::from_json(&json).unwrap());

    for id in [object_join.id, array_join.id] {
        let chain = store.meeting(id).unwrap();
        assert_eq!(chain.kelompok_id, Some(org.kelompok_a1x));
        assert_eq!(chain.desa_id, Some(org.desa_a1));
        assert_eq!(chain.daerah_id, Some(org.daerah_a));
        assert!(can_edit_or_delete_meeting(&store, &store, id, kelompok_admin.id).await);
    }
}
