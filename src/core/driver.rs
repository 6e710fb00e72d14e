use crate::core::alphabet;
use crate::domain::ports::Transmitter;
use crate::utils::error::Result;

/// Separates words in a message. Never looked up in the alphabet.
pub const WORD_SEPARATOR: char = ' ';

/// Feeds a message, character by character, to a [`Transmitter`].
pub struct MorseDriver<T: Transmitter> {
    transmitter: T,
}

impl<T: Transmitter> MorseDriver<T> {
    pub fn new(transmitter: T) -> Self {
        Self { transmitter }
    }

    /// Send `text`, then one trailing word gap.
    ///
    /// An unknown character stops the send before anything of that
    /// character is keyed. What was already keyed stays sent.
    pub fn send_message(&mut self, text: &str) -> Result<()> {
        tracing::info!("Sending {} characters", text.chars().count());

        for character in text.chars().flat_map(char::to_lowercase) {
            self.send_character(character)?;
        }
        self.transmitter.end_of_word()?;

        tracing::info!("Message sent");
        Ok(())
    }

    fn send_character(&mut self, character: char) -> Result<()> {
        if character == WORD_SEPARATOR {
            tracing::debug!("word gap");
            return self.transmitter.end_of_word();
        }

        let code = alphabet::lookup(character)?;
        tracing::debug!("sending {:?} ({} elements)", character, code.len());
        for &signal in code {
            self.transmitter.transmit(signal)?;
        }
        self.transmitter.end_of_character()
    }

    pub fn into_inner(self) -> T {
        self.transmitter
    }
}
