/// A dismissible popup and the payload it was last opened with.
///
/// Closing keeps the payload around; it is only ever read through
/// [`Popup::visible`], which hides it while closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup<T> {
    open: bool,
    payload: Option<T>,
}

impl<T> Default for Popup<T> {
    fn default() -> Self {
        Self {
            open: false,
            payload: None,
        }
    }
}

impl<T> Popup<T> {
    pub fn open(&mut self, payload: T) {
        self.payload = Some(payload);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn visible(&self) -> Option<&T> {
        if self.open {
            self.payload.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_popup_shows_nothing_but_remembers() {
        let mut popup = Popup::default();
        assert_eq!(None, popup.visible());

        popup.open("USNS Mercy");
        assert_eq!(Some(&"USNS Mercy"), popup.visible());

        popup.close();
        assert!(!popup.is_open());
        assert_eq!(None, popup.visible());
        assert_eq!(Some("USNS Mercy"), popup.payload);
    }

    #[test]
    fn reopening_replaces_the_payload() {
        let mut popup = Popup::default();
        popup.open(String::from("A"));
        popup.close();
        popup.open(String::from("B"));
        assert_eq!(Some(&String::from("B")), popup.visible());
    }
}
