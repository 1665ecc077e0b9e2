use std::path::PathBuf;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::json;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::Timings;
use crate::core::choreography::Choreographer;
use crate::core::journal::{EventKind, Journal, MissionEvent};
use crate::core::page::{Cue, Effect, MissionError, Navigation, Page, PageAction, ViewId};
use crate::core::sequencer::{PageSequencer, Screen, SequencerOutcome};
use crate::pages;
use crate::pages::ship::{AssetLoader, ShipVisual};

/// A session shared between handlers and its own timer tasks
pub type SharedSession = Arc<RwLock<MissionSession>>;

/// One visitor's run through the mission.
///
/// Every mutation (actions, keys, timer cues, visual resolution) happens
/// under the session's write lock, so they are applied one at a time.
pub struct MissionSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    sequencer: PageSequencer,
    page: Box<dyn Page>,
    mounted_at: Instant,
    choreographer: Choreographer,
    journal: Journal,
    timings: Timings,
    model_path: PathBuf,
    loader: Arc<dyn AssetLoader>,
    /// Handle given to timer tasks so they never keep the session alive
    handle: Weak<RwLock<MissionSession>>,
}

/// Serializable view of a session, consumed by both the HTML and JSON surfaces
#[derive(Debug, Clone, Serialize)]
pub struct MissionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub screen: Screen,
    pub view: ViewId,
    pub animating: bool,
    /// Context of the primary page
    pub page: serde_json::Value,
    /// Context of the page rendering behind the primary one, if any
    pub overlay_page: Option<serde_json::Value>,
}

impl MissionSession {
    /// Create a session with the landing page mounted
    pub async fn launch(
        timings: Timings,
        model_path: PathBuf,
        loader: Arc<dyn AssetLoader>,
    ) -> SharedSession {
        let id = Uuid::new_v4();
        let session = Arc::new_cyclic(|handle| {
            RwLock::new(MissionSession {
                id,
                created_at: Utc::now(),
                sequencer: PageSequencer::new(),
                page: pages::build(ViewId::Landing, &timings),
                mounted_at: Instant::now(),
                choreographer: Choreographer::new(),
                journal: Journal::new(&format!("mission-{}", id)),
                timings,
                model_path,
                loader,
                handle: handle.clone(),
            })
        });

        session.write().await.mount(ViewId::Landing);
        info!("Mission {} launched", id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_view(&self) -> ViewId {
        self.sequencer.current()
    }

    pub fn screen(&self) -> Screen {
        self.sequencer.screen()
    }

    pub fn page(&self) -> &dyn Page {
        self.page.as_ref()
    }

    /// Apply a user action to the mounted page
    pub fn apply_action(&mut self, action: PageAction) -> Result<(), MissionError> {
        let view = self.page.view();
        let effects = match self.page.handle_action(action) {
            Ok(effects) => effects,
            Err(e) => {
                self.journal.record(EventKind::Warning, &e.to_string(), None);
                return Err(e);
            }
        };

        self.journal.record(
            EventKind::Action,
            &format!("{} on {}", action, view),
            Some(json!({ "action": action, "view": view })),
        );
        self.run_effects(effects)
    }

    /// Forward a key press or release to the ship rig. Returns false when
    /// the mounted page has no ship or the key is not a control.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match self.page.ship_mut() {
            Some(ship) => ship.key_event(key, pressed),
            None => false,
        }
    }

    /// Deliver a timer cue scheduled under `epoch`
    pub(crate) fn deliver_cue(&mut self, epoch: u64, cue: Cue) {
        if !self.choreographer.is_current(epoch) {
            debug!("Dropping stale {:?} from epoch {}", cue, epoch);
            return;
        }

        self.journal.record(
            EventKind::Cue,
            &format!("{:?}", cue),
            Some(json!({ "cue": cue, "epoch": epoch })),
        );

        if cue == Cue::TransitionSettled {
            if let Some(view) = self.sequencer.settle() {
                self.journal
                    .record(EventKind::Navigation, &format!("Transition settled on {}", view), None);
                self.mount(view);
            }
            return;
        }

        let effects = self.page.handle_cue(cue);
        if let Err(e) = self.run_effects(effects) {
            self.journal.record(EventKind::Warning, &e.to_string(), None);
        }
    }

    /// Install the resolved ship visual if the page that asked is still mounted
    pub(crate) fn apply_visual(&mut self, epoch: u64, visual: ShipVisual) {
        if !self.choreographer.is_current(epoch) {
            debug!("Dropping ship visual resolved for epoch {}", epoch);
            return;
        }
        let label = visual.label();
        if let Some(ship) = self.page.ship_mut() {
            ship.set_visual(visual);
            self.journal
                .record(EventKind::Visual, &format!("Ship visual resolved: {}", label), None);
        }
    }

    /// Abort everything still scheduled. Used when the session is evicted.
    pub fn teardown(&mut self) {
        self.choreographer.cancel_all();
        self.journal.record(EventKind::Mount, "Session torn down", None);
    }

    /// The newest `limit` journal events
    pub fn events(&self, limit: usize) -> Vec<MissionEvent> {
        self.journal.recent(limit)
    }

    pub fn snapshot(&self) -> MissionSnapshot {
        let mut page = self.page.context();
        if let (Some(ship), Some(map)) = (self.page.ship(), page.as_object_mut()) {
            let t = self.mounted_at.elapsed().as_secs_f64();
            map.insert("ship".to_string(), ship.context(t));
        }

        let screen = self.sequencer.screen();
        MissionSnapshot {
            id: self.id,
            created_at: self.created_at,
            screen,
            view: screen.primary,
            animating: self.page.is_animating() || screen.overlay.is_some(),
            page,
            overlay_page: screen
                .overlay
                .map(|view| pages::build(view, &self.timings).context()),
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Result<(), MissionError> {
        let epoch = self.choreographer.epoch();
        for effect in effects {
            // A navigation earlier in the batch may have replaced the page
            if !self.choreographer.is_current(epoch) {
                debug!("Skipping {:?}, page was replaced", effect);
                continue;
            }
            match effect {
                Effect::Schedule { after, cue } => self.schedule_cue(after, cue),
                Effect::Navigate(navigation) => self.navigate(navigation)?,
            }
        }
        Ok(())
    }

    fn navigate(&mut self, navigation: Navigation) -> Result<(), MissionError> {
        let from = self.sequencer.current();
        match self.sequencer.apply(navigation)? {
            SequencerOutcome::Switched(view) => {
                self.journal.record(
                    EventKind::Navigation,
                    &format!("{:?}: {} -> {}", navigation, from, view),
                    Some(json!({ "from": from, "to": view })),
                );
                self.mount(view);
            }
            SequencerOutcome::OverlayStarted(view) => {
                self.journal.record(
                    EventKind::Navigation,
                    &format!("{} rendering behind {}", view, from),
                    Some(json!({ "from": from, "overlay": view })),
                );
                self.schedule_cue(self.timings.overlay(), Cue::TransitionSettled);
            }
            SequencerOutcome::Unchanged => {}
        }
        Ok(())
    }

    fn schedule_cue(&mut self, after: Duration, cue: Cue) {
        let epoch = self.choreographer.epoch();
        let handle = self.handle.clone();
        self.choreographer.schedule(after, async move {
            if let Some(session) = handle.upgrade() {
                session.write().await.deliver_cue(epoch, cue);
            }
        });
    }

    fn mount(&mut self, view: ViewId) {
        let epoch = self.choreographer.remount();
        self.page = pages::build(view, &self.timings);
        self.mounted_at = Instant::now();
        self.journal.record(
            EventKind::Mount,
            &format!("Mounted {}", view),
            Some(json!({ "view": view, "epoch": epoch })),
        );

        if self.page.ship().is_some() {
            self.resolve_visual(epoch);
        }

        let effects = self.page.on_mount();
        if let Err(e) = self.run_effects(effects) {
            warn!("Mount effects of {} failed: {}", view, e);
        }
    }

    fn resolve_visual(&mut self, epoch: u64) {
        let loader = self.loader.clone();
        let path = self.model_path.clone();
        let handle = self.handle.clone();
        self.choreographer.track(async move {
            let visual = ShipVisual::resolve(&path, loader.load(&path).await);
            if let Some(session) = handle.upgrade() {
                session.write().await.apply_visual(epoch, visual);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ship::{MockAssetLoader, VisualSlot, TILT_ROLL};
    use tokio::time::sleep;

    fn failing_loader() -> Arc<dyn AssetLoader> {
        let mut loader = MockAssetLoader::new();
        loader
            .expect_load()
            .returning(|_| Err(MissionError::AssetLoad("starship.glb: not found".to_string())));
        Arc::new(loader)
    }

    fn model_loader() -> Arc<dyn AssetLoader> {
        let mut loader = MockAssetLoader::new();
        loader
            .expect_load()
            .returning(|_| Ok(b"glTF\x02\x00\x00\x00".to_vec()));
        Arc::new(loader)
    }

    async fn launch(loader: Arc<dyn AssetLoader>) -> SharedSession {
        MissionSession::launch(Timings::default(), PathBuf::from("starship.glb"), loader).await
    }

    async fn view_of(session: &SharedSession) -> ViewId {
        session.read().await.current_view()
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_mission() {
        let session = launch(failing_loader()).await;
        assert_eq!(view_of(&session).await, ViewId::Landing);

        session.write().await.apply_action(PageAction::Board).unwrap();
        sleep(Duration::from_millis(1900)).await;
        {
            let s = session.read().await;
            assert_eq!(s.screen().overlay, Some(ViewId::LaunchStation));
            assert!(s.snapshot().overlay_page.is_some());
        }
        sleep(Duration::from_millis(510)).await;
        assert_eq!(view_of(&session).await, ViewId::LaunchStation);

        session.write().await.apply_action(PageAction::BlastOff).unwrap();
        sleep(Duration::from_millis(5010)).await;
        assert_eq!(view_of(&session).await, ViewId::Moon);

        session.write().await.apply_action(PageAction::PlantFlag).unwrap();
        sleep(Duration::from_millis(3510)).await;
        assert_eq!(view_of(&session).await, ViewId::Mars);

        sleep(Duration::from_millis(3010)).await;
        {
            let mut s = session.write().await;
            s.apply_action(PageAction::Colonize).unwrap();
            s.apply_action(PageAction::MissionSuccess).unwrap();
            assert_eq!(s.current_view(), ViewId::Completion);
            s.apply_action(PageAction::WorksCited).unwrap();
        }

        sleep(Duration::from_millis(510)).await;
        {
            let mut s = session.write().await;
            let snapshot = s.snapshot();
            assert_eq!(snapshot.page["citations"].as_array().unwrap().len(), 26);

            s.apply_action(PageAction::Back).unwrap();
            let snapshot = s.snapshot();
            assert!(snapshot.page["show_badges"].as_bool().unwrap());
            assert_eq!(snapshot.page["citations"].as_array().unwrap().len(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_page_cancels_countdown() {
        let session = launch(failing_loader()).await;
        session.write().await.apply_action(PageAction::Board).unwrap();
        sleep(Duration::from_millis(2410)).await;

        let old_epoch = {
            let mut s = session.write().await;
            s.apply_action(PageAction::BlastOff).unwrap();
            let epoch = s.choreographer.epoch();
            s.apply_action(PageAction::Back).unwrap();
            epoch
        };
        assert_eq!(view_of(&session).await, ViewId::Landing);

        sleep(Duration::from_millis(6000)).await;
        assert_eq!(view_of(&session).await, ViewId::Landing);

        // A cue that slipped through is discarded by its epoch
        let mut s = session.write().await;
        s.deliver_cue(old_epoch, Cue::WallLatched);
        assert!(!s.page().is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_action_keeps_state() {
        let session = launch(failing_loader()).await;
        let mut s = session.write().await;

        let err = s.apply_action(PageAction::PlantFlag).unwrap_err();
        assert!(matches!(err, MissionError::InvalidAction { view: ViewId::Landing, .. }));
        assert_eq!(s.current_view(), ViewId::Landing);
        assert!(s.events(10).iter().any(|e| e.kind == EventKind::Warning));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_visual_keeps_controls() {
        let session = launch(failing_loader()).await;
        session.write().await.apply_action(PageAction::Board).unwrap();
        sleep(Duration::from_millis(2450)).await;

        let mut s = session.write().await;
        let ship = s.page().ship().unwrap();
        assert_eq!(ship.visual(), &VisualSlot::Ready(ShipVisual::ProceduralFallback));

        assert!(s.key_event("a", true));
        assert_eq!(s.page().ship().unwrap().roll(), TILT_ROLL);
        let snapshot = s.snapshot();
        assert_eq!(snapshot.page["ship"]["visual"], "procedural_fallback");
        assert!(snapshot.page["ship"]["flames"].is_null());
    }

    #[tokio::test(start_paused = true)]
    async fn test_model_visual_on_mars() {
        let session = launch(model_loader()).await;
        {
            let mut s = session.write().await;
            s.navigate(Navigation::Advance).unwrap();
            s.navigate(Navigation::Advance).unwrap();
            s.navigate(Navigation::Advance).unwrap();
            assert_eq!(s.current_view(), ViewId::Mars);
        }
        sleep(Duration::from_millis(10)).await;

        let s = session.read().await;
        assert_eq!(s.page().ship().unwrap().rendered(), "primary_asset");
        assert!(s.snapshot().page["ship"]["flames"].is_object());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_ignored_without_ship() {
        let session = launch(failing_loader()).await;
        assert!(!session.write().await.key_event("a", true));
    }
}
