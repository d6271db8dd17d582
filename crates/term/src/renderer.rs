//! Frame sinks: where rendered frames go.
//!
//! [`TerminalRenderer`] writes every frame in full to stdout. [`CaptureSink`]
//! keeps text snapshots for tests and headless runs. [`TerminalSession`] owns
//! the raw-mode terminal setup and undoes it on drop or panic.

use std::io::{self, Write};
use std::sync::Once;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Receives one complete frame at a time.
pub trait FrameSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

/// Full-frame renderer for a real terminal.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last_size: Option<(u16, u16)>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last_size: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        let size = (fb.width(), fb.height());
        let clear = self.last_size != Some(size);
        self.last_size = Some(size);

        self.buf.clear();
        encode_full_into(fb, clear, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// `clear` wipes the screen first, needed when the frame shrank.
pub fn encode_full_into(fb: &FrameBuffer, clear: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Keeps the text of every presented frame.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    pub frames: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl FrameSink for CaptureSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames.push(fb.to_text());
        Ok(())
    }
}

/// Raw mode, alternate screen and hidden cursor for as long as this lives.
pub struct TerminalSession {
    restored: bool,
}

static PANIC_HOOK: Once = Once::new();

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        let setup = stdout
            .execute(terminal::EnterAlternateScreen)
            .and_then(|s| s.execute(cursor::Hide))
            .and_then(|s| s.execute(terminal::DisableLineWrap))
            .map(|_| ());
        if let Err(err) = setup {
            restore_terminal();
            return Err(err);
        }
        Ok(Self { restored: false })
    }

    /// Restore now instead of on drop.
    pub fn leave(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            restore_terminal();
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Best-effort return to cooked mode. Safe to call more than once.
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.queue(ResetColor);
    let _ = stdout.queue(SetAttribute(Attribute::Reset));
    let _ = stdout.queue(terminal::EnableLineWrap);
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn full_encode_contains_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_full_into(&fb, false, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("AB"));
        assert!(text.contains("\r\nCD"));
    }

    #[test]
    fn clear_is_optional() {
        let fb = FrameBuffer::new(1, 1);
        let mut plain = Vec::new();
        let mut cleared = Vec::new();
        encode_full_into(&fb, false, &mut plain).unwrap();
        encode_full_into(&fb, true, &mut cleared).unwrap();
        assert!(cleared.len() > plain.len());
    }

    #[test]
    fn capture_sink_records_text() {
        let mut sink = CaptureSink::new();
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "ok", CellStyle::default());
        sink.present(&fb).unwrap();
        assert_eq!(sink.last(), Some("ok\n"));
    }
}
