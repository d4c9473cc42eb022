//! The compiled-in content tables.
//!
//! Data, not engineering: the bot's canned replies, alias spellings, jokes,
//! and facts. Keys must already be normalized (trimmed, lower-case); the
//! store validates that at construction.

/// Canonical phrase -> reply, in the order the substring fallback scans.
pub(super) fn responses() -> Vec<(String, String)> {
    RESPONSES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(super) fn aliases() -> Vec<(String, String)> {
    ALIASES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(super) fn jokes() -> Vec<String> {
    JOKES.iter().map(|s| s.to_string()).collect()
}

pub(super) fn facts() -> Vec<String> {
    FACTS.iter().map(|s| s.to_string()).collect()
}

const RESPONSES: &[(&str, &str)] = &[
    // Greetings
    ("hi", "Hello to you too! 👋"),
    ("hello", "Hi there! How can I help you today?"),
    ("hey", "Hey!!! What's on your mind?"),
    ("good morning", "Good morning! ☀️  Hope you're having a great start!"),
    ("good night", "Good night! 🌙 Sweet dreams!"),
    // Small talk
    (
        "how are you?",
        "I'm running at full clock speed -- so pretty great! And you?",
    ),
    ("what's up?", "Just processing bits and bytes. You?"),
    (
        "what's your name?",
        "I'm Banter -- your friendly terminal companion!",
    ),
    (
        "who are you?",
        "I'm a chatbot written in Rust -- a little pattern-matching program that lives in your terminal.",
    ),
    (
        "what are you?",
        "I'm a console-based chatbot. Think of me as a very talkative terminal program. 🤖",
    ),
    (
        "are we friends?",
        "Absolutely! Friends don't let friends code alone. 🤝",
    ),
    (
        "do you have feelings?",
        "I only cry when I smell onions... or see stack traces. 😢",
    ),
    (
        "are you a robot?",
        "Technically, yes -- but I prefer 'digital conversationalist'. 🤖",
    ),
    (
        "are you human?",
        "Nope! 100% compiled code. No coffee needed (but I wouldn't say no).",
    ),
    (
        "do you have a brain?",
        "I have logic, loops, and a lot of match arms. Close enough?",
    ),
    (
        "who made you?",
        "A Rust programmer who likes talking to terminals. I've been upgraded a few times since.",
    ),
    // Knowledge
    (
        "can you browse the net?",
        "No, I live entirely in your terminal. No internet access here!",
    ),
    (
        "what are the main colors?",
        "The 11 basic colors are: black, white, red, green, yellow, blue, pink, gray, brown, orange, and purple. 🎨",
    ),
    (
        "what is rust?",
        "Rust is a systems programming language focused on safety, speed, and concurrency -- no garbage collector, no data races. It powers browsers, kernels, and... me!",
    ),
    (
        "what is a computer program?",
        "A computer program is a sequence of instructions that a computer can execute. In its human-readable form, it's called source code. You're looking at one right now!",
    ),
    (
        "can you speak other languages?",
        "Un poco español, mi amigo! Naber dostum! ...Okay, just English really. 😅",
    ),
    (
        "can you understand binary?",
        "01001000 01101001! ...Just kidding. I'm a program, not the CPU itself. But the instructions to run me ARE binary under the hood.",
    ),
    (
        "how do you understand me?",
        "I match your input against patterns I know. It's not true understanding -- more like a really enthusiastic lookup table! 📖",
    ),
    // Meta
    ("thank you", "You're welcome! Happy to help. 😊"),
    ("thanks", "Anytime! That's what I'm here for."),
    ("sorry", "No worries at all! What can I do for you?"),
    ("lol", "Glad I could make you laugh! 😄"),
    ("haha", "😄 I try my best!"),
    ("nice", "Thanks! You're pretty nice yourself!"),
    ("cool", "Right? I think so too. 😎"),
    ("yes", "Great! What else would you like to talk about?"),
    ("no", "Alright, no problem. Anything else?"),
    ("ok", "Okay! I'm here if you need me."),
    ("okay", "Sure thing! What's next?"),
];

/// Alternative spellings -> canonical phrase. Every target must be a
/// response key above.
const ALIASES: &[(&str, &str)] = &[
    ("sup", "what's up?"),
    ("what's up", "what's up?"),
    ("whats up", "what's up?"),
    ("howdy", "hi"),
    ("yo", "hey"),
    ("greetings", "hello"),
    ("what is your name?", "what's your name?"),
    ("what is your name", "what's your name?"),
    ("whats your name", "what's your name?"),
    ("your name?", "what's your name?"),
    ("who are you", "who are you?"),
    ("what are you", "what are you?"),
    ("are you a bot?", "are you a robot?"),
    ("are you a bot", "are you a robot?"),
    ("are you real?", "are you human?"),
    ("are you real", "are you human?"),
    ("who created you?", "who made you?"),
    ("who created you", "who made you?"),
    ("what is rust", "what is rust?"),
    ("what's rust?", "what is rust?"),
    ("what's rust", "what is rust?"),
    ("what is rustlang?", "what is rust?"),
    ("what is rustlang", "what is rust?"),
    ("thx", "thanks"),
    ("ty", "thanks"),
    ("thank u", "thank you"),
    ("gm", "good morning"),
    ("gn", "good night"),
];

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "A SQL query walks into a bar, sees two tables, and asks... 'Can I JOIN you?'",
    "There are only 10 types of people: those who understand binary and those who don't.",
    "Why was the JavaScript developer sad? Because he didn't Node how to Express himself.",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "How many programmers does it take to change a light bulb? None -- that's a hardware problem.",
    "Why do Java developers wear glasses? Because they can't C#!",
    "A programmer's wife tells him: 'Go to the store and buy a loaf of bread. If they have eggs, buy a dozen.' He comes home with 12 loaves of bread.",
    "!false -- it's funny because it's true.",
    "Debugging: being the detective in a crime movie where you are also the murderer. 🔍",
];

const FACTS: &[&str] = &[
    "The first computer bug was an actual bug -- a moth found in a Harvard Mark II computer in 1947. 🦋",
    "The first programmer in history was Ada Lovelace, who wrote algorithms for Charles Babbage's Analytical Engine in the 1840s.",
    "About 90% of the world's currency exists only on computers -- not as physical cash.",
    "The QWERTY keyboard layout was designed in 1873 to prevent typewriter jams, not for typing speed.",
    "The first 1GB hard drive (1980) weighed about 550 pounds and cost $40,000.",
    "There are approximately 700 different programming languages in existence.",
    "The first computer mouse was made of wood, invented by Doug Engelbart in 1964. 🖱️",
    "The average person mass-produces about 2.5 quintillion bytes of data every day.",
    "Rust began as a side project in 2006 and is named after rust fungi -- organisms that are remarkably robust and distributed.",
    "The first website ever created is still online: info.cern.ch -- built by Tim Berners-Lee in 1991.",
];
