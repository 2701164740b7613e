//! Identifier casing and the export naming policy.
//!
//! The API description uses snake case for fields, lower camel case for
//! methods and title case for types. Generated Go source needs title case for
//! exported names and struct fields, and lower camel case for parameters.
//!
//! [`export_name`] is the single place that decides how a synthesized helper
//! name becomes a public identifier; the matching logic never inspects case.

/// Go reserved words, which cannot be used as parameter names.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Derives the exported form of a synthesized name.
///
/// ```
/// use botsmith_gen::naming::export_name;
///
/// assert_eq!(export_name("forward"), "Forward");
/// assert_eq!(export_name("editText"), "EditText");
/// ```
pub fn export_name(name: &str) -> String {
    upper_first(name)
}

/// Name of the options struct that carries a method's optional fields.
///
/// ```
/// use botsmith_gen::naming::opts_name;
///
/// assert_eq!(opts_name("sendMessage"), "SendMessageOpts");
/// ```
pub fn opts_name(method: &str) -> String {
    format!("{}Opts", export_name(method))
}

/// Converts a snake case name to title case.
///
/// Dot-separated segments are converted independently, so accessor paths
/// keep their dots.
///
/// ```
/// use botsmith_gen::naming::snake_to_title;
///
/// assert_eq!(snake_to_title("reply_to_message_id"), "ReplyToMessageId");
/// assert_eq!(snake_to_title("sender_chat.id"), "SenderChat.Id");
/// ```
pub fn snake_to_title(name: &str) -> String {
    name.split('.')
        .map(|segment| segment.split('_').map(upper_first).collect::<String>())
        .collect::<Vec<_>>()
        .join(".")
}

/// Converts a snake case name to lower camel case.
///
/// ```
/// use botsmith_gen::naming::snake_to_camel;
///
/// assert_eq!(snake_to_camel("chat_id"), "chatId");
/// assert_eq!(snake_to_camel("text"), "text");
/// ```
pub fn snake_to_camel(name: &str) -> String {
    let mut parts = name.split('_');
    let head = parts.next().unwrap_or_default().to_string();
    parts.fold(head, |mut acc, part| {
        acc.push_str(&upper_first(part));
        acc
    })
}

/// Converts a title case name to snake case.
///
/// ```
/// use botsmith_gen::naming::title_to_snake;
///
/// assert_eq!(title_to_snake("ChatMember"), "chat_member");
/// assert_eq!(title_to_snake("Message"), "message");
/// ```
pub fn title_to_snake(name: &str) -> String {
    split_camel_case(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Parameter name for a required field in a helper signature.
///
/// Lower camel case, with a trailing underscore when the result would be a
/// reserved word.
///
/// ```
/// use botsmith_gen::naming::param_name;
///
/// assert_eq!(param_name("user_id"), "userId");
/// assert_eq!(param_name("type"), "type_");
/// ```
pub fn param_name(field: &str) -> String {
    let name = snake_to_camel(field);
    if GO_KEYWORDS.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Appends underscores to `name` until it clashes with none of `taken`.
///
/// ```
/// use botsmith_gen::naming::distinct_name;
///
/// assert_eq!(distinct_name("c", &["b", "opts"]), "c");
/// assert_eq!(distinct_name("c", &["c", "c_"]), "c__");
/// ```
pub fn distinct_name(name: &str, taken: &[&str]) -> String {
    let mut name = name.to_string();
    while taken.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a CamelCase string into individual words.
///
/// - "ChatMember" -> ["Chat", "Member"]
/// - "sendMessage" -> ["send", "Message"]
/// - "HTTPClient" -> ["HTTP", "Client"]
fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let prev = chars[i - 1].1;

        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].1.is_lowercase() && prev.is_uppercase()));

        if is_new_word {
            if offset > word_start {
                words.push(&s[word_start..offset]);
            }
            word_start = offset;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}
