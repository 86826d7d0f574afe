use log::debug;

use cmaner_core::error::{Error, Result};

use super::terminal::{KeySource, Screen};
use super::Menu;

/// Region of the terminal owned by a running menu.
///
/// The terminal stays in raw mode while it is open, so keys pressed during a
/// redraw are neither echoed nor turned into signals. Dropping it erases every
/// row it drew, shows the cursor again and leaves raw mode, whatever way the
/// loop was left.
struct Canvas<'a, S: Screen> {
    screen: &'a mut S,
    screen_buffer: Vec<String>,
}

impl<'a, S: Screen> Canvas<'a, S> {
    fn open(screen: &'a mut S) -> Result<Self> {
        let canvas = Self {
            screen,
            screen_buffer: Vec::with_capacity(16),
        };
        canvas.screen.hide_cursor()?;
        canvas.screen.enter_raw_mode()?;
        Ok(canvas)
    }

    /// Overwrites the previously drawn rows with `frame`.
    ///
    /// A frame shorter than the previous one is padded with blank rows, so
    /// the next call still moves up over everything that was ever drawn.
    fn draw(&mut self, mut frame: Vec<String>) -> Result<()> {
        let previous_rows = self.screen_buffer.len();
        self.screen.move_up(previous_rows)?;

        if frame.len() < previous_rows {
            frame.resize(previous_rows, String::new());
        }

        for line in &frame {
            self.screen.clear_line()?;
            self.screen.write_line(line)?;
        }
        self.screen.flush()?;

        self.screen_buffer = frame;
        Ok(())
    }

    fn erase(&mut self) -> Result<()> {
        let rows = self.screen_buffer.len();
        self.draw(vec![String::new(); rows])?;
        self.screen.move_up(rows)?;
        self.screen_buffer.clear();
        Ok(())
    }
}

impl<S: Screen> Drop for Canvas<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.erase() {
            debug!("Could not erase menu: {e}");
        }
        let _ = self.screen.show_cursor();
        let _ = self.screen.flush();
        if let Err(e) = self.screen.leave_raw_mode() {
            debug!("Could not leave raw mode: {e}");
        }
    }
}

/// Drives `menu` until it finishes.
///
/// Returns `Ok(None)` when the user aborted the menu, which callers must not
/// confuse with a negative answer such as `Some(false)`.
///
/// # Errors
///
/// Terminal and input failures are returned after the screen is restored.
pub fn run_menu<M, S, K>(mut menu: M, screen: &mut S, keys: &mut K) -> Result<Option<M::Output>>
where
    M: Menu,
    S: Screen,
    K: KeySource,
{
    let mut canvas = Canvas::open(screen)?;

    loop {
        canvas.draw(menu.prepare_frame())?;

        let key = keys.next_key()?;
        match menu.process_input(key) {
            Ok(()) => {}
            Err(Error::Cancelled) => {
                debug!("Menu cancelled");
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        if menu.is_finished() {
            return Ok(Some(menu.result()));
        }
    }
}
