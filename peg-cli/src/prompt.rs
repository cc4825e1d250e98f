//! Line-based prompts that re-ask until the answer is acceptable.

use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads answers from `input`.
///
/// End of input is reported as an `UnexpectedEof` error.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Where game text is printed.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until `parse` accepts the trimmed answer.
    pub fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> io::Result<T> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}: ", question)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }
            if let Some(value) = parse(line.trim()) {
                return Ok(value);
            }
        }
    }

    /// Ask for a number in `min..=max`.
    pub fn ask_number_in_range(
        &mut self,
        question: &str,
        min: usize,
        max: usize,
    ) -> io::Result<usize> {
        let question = format!("{} [{}-{}]", question, min, max);
        self.ask(&question, |answer| {
            answer.parse::<usize>().ok().filter(|n| (min..=max).contains(n))
        })
    }

    /// Ask for one of the numbers in `choices`.
    pub fn ask_number_in_list(&mut self, question: &str, choices: &[usize]) -> io::Result<usize> {
        let question = format!("{} {}", question, list_to_string(choices));
        self.ask(&question, |answer| {
            answer.parse::<usize>().ok().filter(|n| choices.contains(n))
        })
    }

    /// Ask for one of `options`, case-insensitively. Returns the upper-case letter.
    pub fn ask_option(&mut self, question: &str, options: &[char]) -> io::Result<char> {
        self.ask(question, |answer| {
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c.to_ascii_uppercase()).filter(|c| options.contains(c)),
                _ => None,
            }
        })
    }

    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let question = format!("{} [y/n]", question);
        self.ask(&question, |answer| match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        })
    }
}

/// `[a, b, c]`
pub fn list_to_string(values: &[usize]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
