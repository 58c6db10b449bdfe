//! Skill List Controller
//!
//! Store plus API, for callers that can simply await each round trip.
//! The browser UI drives the same store through a channel instead (see
//! the `skill-board-ui` dispatch loop); both go through `SkillStore::dispatch`
//! and `run_effect`.

use crate::api::{run_effect, SkillApi};
use crate::message::Message;
use crate::model::{SkillDraft, SkillId, SkillPatch};
use crate::store::SkillStore;

pub struct SkillController<A> {
    api: A,
    store: SkillStore,
}

impl<A: SkillApi> SkillController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: SkillStore::new(),
        }
    }

    pub fn store(&self) -> &SkillStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Dispatch a message and, if it needs the server, wait for the reply
    /// and apply it too
    pub async fn send(&mut self, message: Message) {
        if let Some(effect) = self.store.dispatch(message) {
            let completion = run_effect(&self.api, effect).await;
            self.store.dispatch(completion);
        }
    }

    /// Replace the collection with the server's list
    pub async fn load(&mut self) {
        self.send(Message::Load).await;
    }

    pub async fn create(&mut self, draft: SkillDraft) {
        self.send(Message::RequestCreate(draft)).await;
    }

    pub async fn update(&mut self, patch: SkillPatch) {
        self.send(Message::RequestUpdate(patch)).await;
    }

    pub async fn delete(&mut self, id: SkillId) {
        self.send(Message::RequestDelete(id)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Call, FakeApi};
    use crate::level::Level;
    use futures::executor::block_on;

    fn controller_with(names: &[&str]) -> SkillController<FakeApi> {
        let api = FakeApi::new();
        for name in names {
            api.seed(name, "");
        }
        let mut controller = SkillController::new(api);
        block_on(controller.load());
        controller
    }

    fn ids(controller: &SkillController<FakeApi>) -> Vec<SkillId> {
        controller.store().skills().map(|s| s.id).collect()
    }

    #[test]
    fn test_load_replaces_collection() {
        let controller = controller_with(&["a", "b"]);
        assert_eq!(ids(&controller), vec![1, 2]);
    }

    #[test]
    fn test_load_failure_leaves_collection_empty() {
        let api = FakeApi::new();
        api.seed("a", "");
        api.fail_next();
        let mut controller = SkillController::new(api);
        block_on(controller.load());
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_create_appends_confirmed_skill() {
        let mut controller = controller_with(&["a"]);
        block_on(controller.create(SkillDraft::new("Piano", "daily practice")));

        let created = controller.store().get(2).expect("created skill is listed");
        assert_eq!(created.skill.name, "Piano");
        assert_eq!(created.skill.details, "daily practice");
        assert_eq!(created.skill.level, Level::Bad);

        let listed = block_on(controller.api().list()).unwrap();
        assert_eq!(listed.iter().filter(|s| s.name == "Piano").count(), 1);
    }

    #[test]
    fn test_rejected_create_changes_nothing() {
        let mut controller = controller_with(&["a"]);
        block_on(controller.create(SkillDraft::new("", "no name")));
        assert_eq!(ids(&controller), vec![1]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut controller = controller_with(&["a", "b", "c"]);
        block_on(controller.update(SkillPatch::text(1, "alpha", "first")));
        assert_eq!(ids(&controller), vec![1, 2, 3]);
        let row = controller.store().get(1).unwrap();
        assert_eq!(row.skill.name, "alpha");
        assert_eq!(row.skill.level, Level::Bad);
    }

    #[test]
    fn test_update_of_missing_record_changes_nothing() {
        let mut controller = controller_with(&["a"]);
        let before = controller.store().rows().to_vec();
        block_on(controller.update(SkillPatch::level(42, Level::Fantastic)));
        assert_eq!(controller.store().rows(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut controller = controller_with(&["a", "b", "c"]);
        block_on(controller.delete(2));
        assert_eq!(ids(&controller), vec![1, 3]);
        let listed: Vec<_> = block_on(controller.api().list()).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(listed, vec![1, 3]);
    }

    #[test]
    fn test_failed_delete_keeps_record() {
        let mut controller = controller_with(&["a"]);
        controller.api().fail_next();
        block_on(controller.delete(1));
        assert_eq!(ids(&controller), vec![1]);
    }

    #[test]
    fn test_level_bounds_issue_no_request() {
        let mut controller = controller_with(&["a"]);
        let calls_before = controller.api().calls().len();
        block_on(controller.send(Message::Decrease(1)));
        assert_eq!(controller.api().calls().len(), calls_before);
        assert_eq!(controller.store().get(1).unwrap().skill.level, Level::Bad);

        block_on(controller.send(Message::Increase(1)));
        block_on(controller.send(Message::Increase(1)));
        let calls_at_top = controller.api().calls().len();
        block_on(controller.send(Message::Increase(1)));
        assert_eq!(controller.api().calls().len(), calls_at_top);
        assert_eq!(controller.store().get(1).unwrap().skill.level, Level::Fantastic);
    }

    #[test]
    fn test_edit_submit_preserves_level() {
        let mut controller = controller_with(&["a"]);
        block_on(controller.send(Message::Increase(1)));
        block_on(controller.send(Message::ToggleEdit(1)));
        block_on(controller.send(Message::EditName(1, "renamed".to_string())));
        block_on(controller.send(Message::ToggleEdit(1)));

        let row = controller.store().get(1).unwrap();
        assert!(!row.is_editing());
        assert_eq!(row.skill.name, "renamed");
        assert_eq!(row.skill.level, Level::HalfBad);
        let calls = controller.api().calls();
        assert_eq!(calls.last(), Some(&Call::Update(SkillPatch::text(1, "renamed", ""))));
    }

    #[test]
    fn test_failed_edit_submit_still_leaves_edit_mode() {
        let mut controller = controller_with(&["a"]);
        block_on(controller.send(Message::ToggleEdit(1)));
        block_on(controller.send(Message::EditName(1, String::new())));
        block_on(controller.send(Message::ToggleEdit(1)));

        let row = controller.store().get(1).unwrap();
        assert!(!row.is_editing());
        assert_eq!(row.skill.name, "a");
    }

    #[test]
    fn test_piano_scenario() {
        let mut controller = SkillController::new(FakeApi::new());
        block_on(controller.load());
        block_on(controller.create(SkillDraft::new("Piano", "daily practice")));
        assert_eq!(controller.store().get(1).unwrap().skill.level, Level::Bad);

        block_on(controller.send(Message::Increase(1)));
        assert_eq!(controller.store().get(1).unwrap().skill.level, Level::HalfBad);

        block_on(controller.delete(1));
        assert!(controller.store().is_empty());
        let listed = block_on(controller.api().list()).unwrap();
        assert!(listed.iter().all(|s| s.id != 1));
    }
}
