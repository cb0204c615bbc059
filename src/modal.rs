use crate::models::post::{PostKey, PostSummary};

/// Which post, if any, is shown in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(PostKey),
}

impl ModalState {
    /// "Read more" on a card. Only opens from `Closed`, and only for a post
    /// that is currently rendered; anything else leaves the state unchanged.
    pub fn open(self, key: PostKey, visible: &[&PostSummary]) -> Self {
        match self {
            ModalState::Closed if visible.iter().any(|p| p.key == key) => ModalState::Open(key),
            other => other,
        }
    }

    /// The close button.
    pub fn close(self) -> Self {
        ModalState::Closed
    }

    pub fn selected(self) -> Option<PostKey> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(key) => Some(key),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// State for a request: start closed, then open whatever `?post=` names.
    pub fn from_query(post: Option<&str>, visible: &[&PostSummary]) -> Self {
        let Some(raw) = post.map(str::trim).filter(|s| !s.is_empty()) else {
            return ModalState::Closed;
        };
        match PostKey::from_slug(raw) {
            Some(key) => {
                let state = ModalState::Closed.open(key, visible);
                if !state.is_open() {
                    log::debug!("Post {:?} is not on this page; overlay stays closed", raw);
                }
                state
            }
            None => {
                log::debug!("Ignoring unknown post key {:?}", raw);
                ModalState::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::models::category::{Category, FilterSelection};
    use crate::models::post::CATALOG;

    fn everything() -> Vec<&'static PostSummary> {
        filter::apply(&CATALOG, FilterSelection::All)
    }

    #[test]
    fn open_then_close() {
        let visible = everything();
        let state = ModalState::Closed.open(PostKey::Mpesa, &visible);
        assert_eq!(state, ModalState::Open(PostKey::Mpesa));
        assert_eq!(state.close(), ModalState::Closed);
        assert!(!state.close().is_open());
    }

    #[test]
    fn cannot_switch_posts_without_closing() {
        let visible = everything();
        let state = ModalState::Open(PostKey::Mpesa).open(PostKey::Zipline, &visible);
        assert_eq!(state, ModalState::Open(PostKey::Mpesa));
        let reopened = state.close().open(PostKey::Zipline, &visible);
        assert_eq!(reopened, ModalState::Open(PostKey::Zipline));
    }

    #[test]
    fn only_rendered_posts_can_open() {
        let visible = filter::apply(&CATALOG, FilterSelection::Only(Category::Healthcare));
        assert_eq!(ModalState::Closed.open(PostKey::Mpesa, &visible), ModalState::Closed);
        assert_eq!(
            ModalState::Closed.open(PostKey::Narayana, &visible),
            ModalState::Open(PostKey::Narayana)
        );
    }

    #[test]
    fn closing_when_closed_stays_closed() {
        assert_eq!(ModalState::Closed.close(), ModalState::Closed);
        assert_eq!(ModalState::default(), ModalState::Closed);
    }

    #[test]
    fn from_query_handles_missing_and_unknown() {
        let visible = everything();
        assert_eq!(ModalState::from_query(None, &visible), ModalState::Closed);
        assert_eq!(ModalState::from_query(Some(""), &visible), ModalState::Closed);
        assert_eq!(ModalState::from_query(Some("kiva"), &visible), ModalState::Closed);
        assert_eq!(
            ModalState::from_query(Some("grameen"), &visible).selected(),
            Some(PostKey::Grameen)
        );
    }
}
