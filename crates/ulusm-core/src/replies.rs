//! User-visible texts.
//!
//! Failures are phrased as something the user can do next; raw error detail
//! only ever goes to the logs.

pub const POLL_OPTIONS: [&str; 2] = ["Yes", "No"];

pub fn welcome(name: &str) -> String {
    format!("Hello {name}, welcome to Ulusm Bot!")
}

pub fn start_first() -> String {
    "Please use the /start command to initiate the conversation first.".to_string()
}

pub fn usage_hint(name: &str) -> String {
    format!(
        "Please use one of the commands to interact with the bot, {name}. Use /help to see available commands."
    )
}

pub fn help(name: &str) -> String {
    format!(
        "Hi {name}! I'm a Telegram Bot created by Thobakgale. Follow these commands:

/start - to start the conversation
/content - Info about Ulusm Skills
/contact - Info about how to contact Thobakgale
/gateways - List of supported payment gateways
/rules - Our rules and policies
/help - to get this help menu
/join_group - To request joining the private group by providing your country"
    )
}

pub fn contact(name: &str) -> String {
    format!(
        "You can contact Thobakgale (Payment Processing Agent) via the following:

📧 Email: thobakgale@example.com
📞 Phone: +1234567890
🌐 Website: www.thobakgale-payments.com

Feel free to reach out for any inquiries or services, {name}!"
    )
}

pub fn content(name: &str) -> String {
    format!(
        "Ulusm Bot offers the following services as a payment processing agent:

💳 Payment Gateway Setup
🔐 Secure Transaction Management
💼 Business Payment Consulting
📊 Transaction Analytics and Reporting
🏦 Bank Integration for Automated Payments
🤝 Customer Support and Payment Issue Resolution

Let me know if you need more details about any of these services, {name}!"
    )
}

pub fn gateways(name: &str) -> String {
    format!(
        "Ulusm Bot supports the following payment gateways, {name}:

🏦 Venmo
💵 CashApp
💳 Stripe
🍎 ApplePay
🛒 Alipay
💰 PayPal
₿ Bitcoin
🔒 Monero

Feel free to ask for more details on how to use any of these payment methods!"
    )
}

pub fn rules(name: &str) -> String {
    format!(
        "Ulusm Bot Rules, {name}:

🚫 We do not condone carding, fraud, or any illegal activities.
🛡️ Integrity is highly appreciated in all transactions.
✅ We value honest business and secure payments.

Please adhere to these rules for a smooth and professional experience."
    )
}

pub fn ask_country(name: &str) -> String {
    format!("Hello {name}, please enter your country:")
}

/// Longest slice of user input echoed back in a reply.
pub const MAX_ECHO_CHARS: usize = 64;

pub fn invalid_country(input: &str, name: &str) -> String {
    let shown = truncate_chars(input, MAX_ECHO_CHARS);
    format!("'{shown}' is not a valid country, {name}. Please enter a valid country.")
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

pub fn catalog_unavailable(name: &str) -> String {
    format!(
        "Sorry {name}, we could not check your country right now. Please send it again in a moment."
    )
}

pub fn ineligible(name: &str) -> String {
    format!("We are sorry, {name}, You are not eligible.")
}

pub fn poll_question(name: &str) -> String {
    format!("{name}, are you interested in joining the private group?")
}

pub fn poll_unavailable(name: &str) -> String {
    format!(
        "Sorry {name}, something went wrong on our side. Please send your country again to retry."
    )
}

pub fn processing(name: &str) -> String {
    format!("Processing for {name}...")
}

pub fn already_invited(name: &str) -> String {
    format!(
        "{name}, you were already given a one-time invite link. You cannot receive another invite."
    )
}

pub fn declined(name: &str) -> String {
    format!("Sad to see you declining, {name}...")
}

pub fn invited(name: &str, group_teaser: &str, link: &str) -> String {
    format!("{name}, you are invited to {group_teaser}. Here is your invite link: {link}")
}

pub fn invite_failed(name: &str) -> String {
    format!(
        "There was an issue creating an invite link for you, {name}. Please try again later."
    )
}

/// Last four characters of the group name; the whole name if it is shorter.
pub fn group_teaser(group_name: &str) -> &str {
    let count = group_name.chars().count();
    if count <= 4 {
        return group_name;
    }
    let start = group_name
        .char_indices()
        .nth(count - 4)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &group_name[start..]
}
