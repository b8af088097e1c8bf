// Application state: the router plus the upload screen's local state.
// User input arrives as `Event`s and is handed to whichever screen is
// active.

use crate::contents::ContentsScreen;
use crate::router::{Route, Router};
use crate::style::Palette;
use crate::upload::{Notifier, SelectedFile, UploadOutcome, UploadScreen};
use log::debug;
use std::io::{self, Write};

/// Everything the user can do across both screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Files picked in the browse dialog.
    FilesSelected(Vec<SelectedFile>),
    DragEnter,
    DragLeave,
    /// Files dropped on the drop zone.
    Drop(Vec<SelectedFile>),
    /// The "Back to Upload" control.
    NavigateBack,
}

#[derive(Debug, Default)]
pub struct App {
    router: Router,
    upload: UploadScreen,
    contents: ContentsScreen,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: Route) -> Self {
        App {
            router: Router::starting_at(route),
            ..Self::default()
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn upload_screen(&self) -> &UploadScreen {
        &self.upload
    }

    /// Apply one event. Upload events are ignored unless the upload screen
    /// is showing. Returns the upload outcome when the event was a
    /// selection or a drop that reached validation, or the notifier's error
    /// if a rejection notice could not be acknowledged.
    pub fn dispatch(
        &mut self,
        event: Event,
        notifier: &mut dyn Notifier,
    ) -> io::Result<Option<UploadOutcome>> {
        let before = self.router.current();
        let outcome = match (before, event) {
            (_, Event::NavigateBack) => {
                self.contents.back(&mut self.router);
                None
            }
            (Route::Upload, Event::DragEnter) => {
                self.upload.drag_enter();
                None
            }
            (Route::Upload, Event::DragLeave) => {
                self.upload.drag_leave();
                None
            }
            (Route::Upload, Event::FilesSelected(files)) => {
                Some(self.upload.select(&files, &mut self.router, notifier)?)
            }
            (Route::Upload, Event::Drop(files)) => {
                Some(self.upload.drop_files(&files, &mut self.router, notifier)?)
            }
            (Route::Contents, event) => {
                debug!("ignoring {:?} on the contents screen", event);
                None
            }
        };

        // Re-entering the upload screen starts from a fresh drop zone.
        if before != Route::Upload && self.router.current() == Route::Upload {
            self.upload = UploadScreen::new();
        }
        Ok(outcome)
    }

    pub fn render<W: Write>(&self, out: &mut W, palette: Palette) -> io::Result<()> {
        match self.router.current() {
            Route::Upload => self.upload.render(out, palette),
            Route::Contents => self.contents.render(out, palette),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::PDF_MEDIA_TYPE;

    #[derive(Default)]
    struct Count(usize);

    impl Notifier for Count {
        fn notify(&mut self, _message: &str) -> io::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    struct Unanswered;

    impl Notifier for Unanswered {
        fn notify(&mut self, _message: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    fn pdf() -> Vec<SelectedFile> {
        vec![SelectedFile::new("book.pdf", PDF_MEDIA_TYPE)]
    }

    #[test]
    fn drop_of_pdf_shows_contents() {
        let mut app = App::new();
        let mut n = Count::default();
        app.dispatch(Event::DragEnter, &mut n).unwrap();
        let outcome = app.dispatch(Event::Drop(pdf()), &mut n).unwrap();
        assert_eq!(outcome, Some(UploadOutcome::Accepted));
        assert_eq!(app.route(), Route::Contents);
        assert_eq!(n.0, 0);
    }

    #[test]
    fn each_bad_attempt_notifies_once() {
        let mut app = App::new();
        let mut n = Count::default();
        let txt = vec![SelectedFile::new("a.txt", "text/plain")];
        app.dispatch(Event::FilesSelected(txt.clone()), &mut n).unwrap();
        app.dispatch(Event::Drop(txt), &mut n).unwrap();
        assert_eq!(n.0, 2);
        assert_eq!(app.route(), Route::Upload);
    }

    #[test]
    fn failed_notice_reaches_the_caller() {
        let mut app = App::new();
        let txt = vec![SelectedFile::new("a.txt", "text/plain")];
        let err = app
            .dispatch(Event::FilesSelected(txt), &mut Unanswered)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(app.route(), Route::Upload);
    }

    #[test]
    fn upload_events_are_ignored_on_contents() {
        let mut app = App::starting_at(Route::Contents);
        let mut n = Count::default();
        assert_eq!(app.dispatch(Event::Drop(pdf()), &mut n).unwrap(), None);
        app.dispatch(Event::DragEnter, &mut n).unwrap();
        assert_eq!(app.route(), Route::Contents);
        assert!(!app.upload_screen().is_dragging());
    }

    #[test]
    fn back_resets_hover_state() {
        let mut app = App::new();
        let mut n = Count::default();
        app.dispatch(Event::DragEnter, &mut n).unwrap();
        app.dispatch(Event::FilesSelected(pdf()), &mut n).unwrap();
        assert_eq!(app.route(), Route::Contents);
        app.dispatch(Event::NavigateBack, &mut n).unwrap();
        assert_eq!(app.route(), Route::Upload);
        assert!(!app.upload_screen().is_dragging());
    }

    #[test]
    fn back_on_upload_keeps_drag_state() {
        let mut app = App::new();
        let mut n = Count::default();
        app.dispatch(Event::DragEnter, &mut n).unwrap();
        app.dispatch(Event::NavigateBack, &mut n).unwrap();
        assert_eq!(app.route(), Route::Upload);
        assert!(app.upload_screen().is_dragging());
    }

    #[test]
    fn render_follows_route() {
        let mut app = App::new();
        let mut n = Count::default();
        let mut buf = Vec::new();
        app.render(&mut buf, Palette::Plain).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("Physics Textbook TOC"));

        app.dispatch(Event::FilesSelected(pdf()), &mut n).unwrap();
        buf.clear();
        app.render(&mut buf, Palette::Plain).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("Table of Contents"));
    }
}
