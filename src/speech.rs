//! Fire-and-forget word pronunciation.
//!
//! Wraps the browser speech synthesis API. Nothing awaits the result and
//! scoring never depends on it; if the API is missing or errors, the word is
//! simply not spoken.

/// Speak `text` with an English voice hint. Best effort only.
pub fn speak(text: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Ok(synth) = win.speech_synthesis() else {
        return;
    };
    let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) else {
        return;
    };
    // Language hint selects an English voice where one exists; the engine
    // falls back to its default voice otherwise.
    utterance.set_lang("en-US");
    // Slightly slower than default reads better for young learners.
    utterance.set_rate(0.9);
    synth.speak(&utterance);
}
