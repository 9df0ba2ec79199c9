use std::io::{self, Read};

use aho_corasick::{AhoCorasick, BuildError, MatchKind};
use lib_2048::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    Restart,
    Dismiss,
    Quit,
}

const KEY_BINDINGS: [(&[u8], Key); 11] = [
    (b"\x1b[A", Key::Move(Direction::Up)),
    (b"\x1b[B", Key::Move(Direction::Down)),
    (b"\x1b[C", Key::Move(Direction::Right)),
    (b"\x1b[D", Key::Move(Direction::Left)),
    (b"w", Key::Move(Direction::Up)),
    (b"s", Key::Move(Direction::Down)),
    (b"d", Key::Move(Direction::Right)),
    (b"a", Key::Move(Direction::Left)),
    (b"r", Key::Restart),
    (b"c", Key::Dismiss),
    (b"q", Key::Quit),
];

/// Turns raw terminal bytes into [`Key`]s. Unbound bytes are skipped.
pub struct Keyboard<R> {
    input: R,
    bindings: AhoCorasick,
    buf: [u8; 128],
    buf_len: usize,
}

impl<R: Read> Keyboard<R> {
    pub fn new(input: R) -> Result<Self, BuildError> {
        let bindings = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(KEY_BINDINGS.iter().map(|&(bytes, _)| bytes))?;

        Ok(Self {
            input,
            bindings,
            buf: [0; 128],
            buf_len: 0,
        })
    }

    /// Blocks until input arrives and returns the keys in it, or `None` once
    /// the input is closed.
    ///
    /// An escape sequence cut off at the end of a read is kept and completed
    /// by the next one.
    pub fn read_keys(&mut self) -> io::Result<Option<Vec<Key>>> {
        let read = self.input.read(&mut self.buf[self.buf_len..])?;

        if read == 0 {
            return Ok(None);
        }

        self.buf_len += read;

        let keys = self.decode(&self.buf[..self.buf_len]);

        let carry: &[u8] = match &self.buf[..self.buf_len] {
            [.., 0x1b, b'['] => b"\x1b[",
            [.., 0x1b] => b"\x1b",
            _ => b"",
        };

        self.buf[..carry.len()].copy_from_slice(carry);
        self.buf_len = carry.len();

        Ok(Some(keys))
    }

    fn decode(&self, bytes: &[u8]) -> Vec<Key> {
        self.bindings
            .find_iter(bytes)
            .map(|m| KEY_BINDINGS[m.pattern().as_usize()].1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Hands out one chunk per read, like a terminal delivering keystrokes.
    struct Chunks(Vec<&'static [u8]>);

    impl Read for Chunks {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Ok(0);
            }

            let chunk = self.0.remove(0);
            buf[..chunk.len()].copy_from_slice(chunk);

            Ok(chunk.len())
        }
    }

    fn keyboard(chunks: &[&'static [u8]]) -> Keyboard<Chunks> {
        Keyboard::new(Chunks(chunks.to_vec())).unwrap()
    }

    #[rstest]
    #[case(b"\x1b[A", Key::Move(Direction::Up))]
    #[case(b"\x1b[B", Key::Move(Direction::Down))]
    #[case(b"\x1b[C", Key::Move(Direction::Right))]
    #[case(b"\x1b[D", Key::Move(Direction::Left))]
    #[case(b"a", Key::Move(Direction::Left))]
    #[case(b"r", Key::Restart)]
    #[case(b"c", Key::Dismiss)]
    #[case(b"q", Key::Quit)]
    fn single_keys(#[case] bytes: &'static [u8], #[case] key: Key) {
        let mut keyboard = keyboard(&[bytes]);

        assert_eq!(keyboard.read_keys().unwrap(), Some(vec![key]));
    }

    #[test]
    fn unbound_bytes_are_ignored() {
        let mut keyboard = keyboard(&[b"x\x1b[Az9"]);

        assert_eq!(
            keyboard.read_keys().unwrap(),
            Some(vec![Key::Move(Direction::Up)])
        );
    }

    #[test]
    fn split_escape_sequence_is_completed() {
        let mut keyboard = keyboard(&[b"d\x1b", b"[", b"B"]);

        assert_eq!(
            keyboard.read_keys().unwrap(),
            Some(vec![Key::Move(Direction::Right)])
        );
        assert_eq!(keyboard.read_keys().unwrap(), Some(vec![]));
        assert_eq!(
            keyboard.read_keys().unwrap(),
            Some(vec![Key::Move(Direction::Down)])
        );
    }

    #[test]
    fn closed_input_ends() {
        let mut keyboard = keyboard(&[]);

        assert_eq!(keyboard.read_keys().unwrap(), None);
    }
}
