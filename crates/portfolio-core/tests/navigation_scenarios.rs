//! End-to-end navigation scenarios through the history bridge
//!
//! Drives `HistoryBridge<MemoryHistory>` the way the app does: user actions
//! via `dispatch`, native back/forward via `MemoryHistory::back` followed
//! by `on_pop`.

use portfolio_core::{
    Catalog, CatalogTab, HistoryBackend, HistoryBridge, HistoryEntry, KeyInput, LightboxAction,
    MemoryHistory, ProjectRef, ViewAction, ViewState,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog parses")
}

fn project(catalog: &Catalog, id: &str) -> ProjectRef {
    catalog.find(id).expect("project exists").clone()
}

fn abc() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

/// Native back button: move the cursor, then deliver the pop event
fn press_back(nav: &mut HistoryBridge<MemoryHistory>) {
    if nav.backend_mut().back() {
        nav.on_pop().expect("pop never fails");
    }
}

fn key(nav: &mut HistoryBridge<MemoryHistory>, key: &str) {
    let _ = nav.dispatch(ViewAction::Lightbox(LightboxAction::Key(KeyInput::parse(key))));
}

#[test]
fn select_then_back_button() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let slingshot = project(&catalog, "slingshot");

    nav.dispatch(ViewAction::SelectProject(slingshot.clone())).unwrap();
    assert_eq!(
        nav.state(),
        &ViewState::Detail {
            tab: CatalogTab::Games,
            project: slingshot
        }
    );
    assert_eq!(nav.backend().current_fragment(), "#slingshot");

    nav.dispatch(ViewAction::GoBack).unwrap();
    assert_eq!(nav.state(), &ViewState::Catalog { tab: CatalogTab::Games });
    assert_eq!(nav.backend().current_fragment(), "#projects");
}

#[test]
fn lightbox_arrow_keys_then_escape() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let p = project(&catalog, "slingshot");

    nav.dispatch(ViewAction::SelectProject(p.clone())).unwrap();
    nav.dispatch(ViewAction::OpenModal { images: abc(), index: 1 }).unwrap();
    let lightbox = nav.state().lightbox().unwrap();
    assert_eq!(lightbox.images(), abc().as_slice());
    assert_eq!(lightbox.index(), 1);

    key(&mut nav, "ArrowRight");
    assert_eq!(nav.state().lightbox().unwrap().index(), 2);

    key(&mut nav, "ArrowRight");
    assert_eq!(nav.state().lightbox().unwrap().index(), 2);

    key(&mut nav, "Escape");
    assert!(nav.state().lightbox().is_none());
    assert_eq!(nav.state().selection(), Some(&p));
}

#[test]
fn empty_gallery_never_opens() {
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    assert!(nav
        .dispatch(ViewAction::OpenModal { images: vec![], index: 0 })
        .is_err());
    assert!(nav.state().lightbox().is_none());
    assert_eq!(nav.backend().len(), 1, "nothing pushed");

    for k in ["ArrowRight", "ArrowLeft", "Escape"] {
        key(&mut nav, k);
    }
    assert_eq!(nav.state(), &ViewState::default());
}

#[test]
fn native_back_closes_modal_before_detail() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let fox = project(&catalog, "foxs-tale");

    nav.dispatch(ViewAction::SelectProject(fox.clone())).unwrap();
    nav.dispatch(ViewAction::OpenModal { images: fox.gallery(), index: 0 }).unwrap();
    assert_eq!(nav.backend().current(), Some(&HistoryEntry::LightboxOpenMarker));
    assert_eq!(nav.backend().current_fragment(), "#foxs-tale");

    press_back(&mut nav);
    assert!(matches!(nav.state(), ViewState::Detail { .. }));

    press_back(&mut nav);
    assert_eq!(nav.state(), &ViewState::Catalog { tab: CatalogTab::Games });
    assert_eq!(nav.backend().current_fragment(), "#projects");
}

#[test]
fn pop_ignores_which_entry_was_popped() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let fox = project(&catalog, "foxs-tale");

    nav.dispatch(ViewAction::SelectProject(fox)).unwrap();
    nav.dispatch(ViewAction::OpenModal { images: abc(), index: 0 }).unwrap();
    nav.dispatch(ViewAction::CloseModal).unwrap();

    // The modal is already closed, so the pop of the marker entry deselects
    press_back(&mut nav);
    assert_eq!(nav.state(), &ViewState::Catalog { tab: CatalogTab::Games });

    // Forward does not replay anything: with nothing open it is a no-op
    let before = nav.state().clone();
    if nav.backend_mut().forward() {
        nav.on_pop().unwrap();
    }
    assert_eq!(nav.state(), &before);
}

#[test]
fn modal_directly_from_catalog() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    nav.dispatch(ViewAction::SelectTab(CatalogTab::Modeling)).unwrap();

    let cozmo = project(&catalog, "cozmo-robot");
    nav.dispatch(ViewAction::OpenModal { images: cozmo.gallery(), index: 3 }).unwrap();
    assert!(matches!(nav.state(), ViewState::CatalogModal { .. }));
    assert_eq!(nav.state().selection(), None);

    press_back(&mut nav);
    assert_eq!(nav.state(), &ViewState::Catalog { tab: CatalogTab::Modeling });
}

#[test]
fn logo_goes_home_from_deep_state() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    nav.dispatch(ViewAction::SelectTab(CatalogTab::Scenes)).unwrap();
    let scene = project(&catalog, "star-wars-scene");
    nav.dispatch(ViewAction::SelectProject(scene.clone())).unwrap();
    nav.dispatch(ViewAction::OpenModal { images: scene.gallery(), index: 0 }).unwrap();

    nav.dispatch(ViewAction::GoHome).unwrap();
    assert_eq!(nav.state(), &ViewState::Catalog { tab: CatalogTab::Games });
    assert_eq!(nav.backend().current(), Some(&HistoryEntry::AtCatalog));
}

#[test]
fn backdrop_click_suppressed_on_mobile() {
    let catalog = catalog();
    let config = portfolio_core::PortfolioConfig::default();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let p = project(&catalog, "Ricochet");
    nav.dispatch(ViewAction::SelectProject(p.clone())).unwrap();

    nav.dispatch(ViewAction::OpenModal { images: p.gallery(), index: 0 }).unwrap();
    nav.dispatch(ViewAction::Lightbox(LightboxAction::Mount(
        config.lightbox_for_viewport(375.0),
    )))
    .unwrap();
    nav.dispatch(ViewAction::Lightbox(LightboxAction::BackdropClick)).unwrap();
    assert!(nav.state().is_modal_open());

    nav.dispatch(ViewAction::CloseModal).unwrap();
    nav.dispatch(ViewAction::OpenModal { images: p.gallery(), index: 0 }).unwrap();
    nav.dispatch(ViewAction::Lightbox(LightboxAction::Mount(
        config.lightbox_for_viewport(1440.0),
    )))
    .unwrap();
    nav.dispatch(ViewAction::Lightbox(LightboxAction::BackdropClick)).unwrap();
    assert!(!nav.state().is_modal_open());
    assert_eq!(nav.state().selection(), Some(&p));
}

#[test]
fn constructed_route_opens_project_on_its_tab() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let route = portfolio_core::resolve_fragment(&catalog, "#rainbow-dagger");
    nav.open_route(route, &catalog).unwrap();

    assert_eq!(nav.state().tab(), CatalogTab::Modeling);
    assert_eq!(
        nav.state().selection().map(|p| p.id.as_str()),
        Some("rainbow-dagger")
    );
    assert_eq!(nav.backend().current_fragment(), "#rainbow-dagger");
}

#[test]
fn unknown_route_stays_on_catalog() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let route = portfolio_core::resolve_fragment(&catalog, "#does-not-exist");
    nav.open_route(route, &catalog).unwrap();
    assert_eq!(nav.state(), &ViewState::default());
    assert_eq!(nav.backend().len(), 1);
}

#[test]
fn scene_showcase_lightbox_ends_at_last_screenshot() {
    let catalog = catalog();
    let mut nav = HistoryBridge::new(MemoryHistory::new());
    let scene = project(&catalog, "star-wars-scene");
    nav.dispatch(ViewAction::SelectProject(scene.clone())).unwrap();

    let gallery = scene.gallery();
    assert_eq!(gallery.len(), 5);
    nav.dispatch(ViewAction::OpenModal { images: gallery, index: 4 }).unwrap();

    let lightbox = nav.state().lightbox().expect("lightbox open");
    assert_eq!(lightbox.counter(), "5 / 5");
    assert!(!lightbox.can_next());
}
