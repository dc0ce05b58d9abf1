use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    /// Prints a green or red verdict line.
    pub fn print_verdict(&mut self, ok: bool, yes: &str, no: &str) -> std::io::Result<()> {
        if ok {
            self.set_color(Color::Green);
            writeln!(self.stdout, "{}", yes)?;
        } else {
            self.set_color(Color::Red);
            writeln!(self.stdout, "{}", no)?;
        }
        self.reset();
        Ok(())
    }

    pub fn print_capacity(&mut self, capacity: u64) -> std::io::Result<()> {
        self.set_bold();
        writeln!(self.stdout, "{}", capacity)?;
        self.reset();
        Ok(())
    }
}
