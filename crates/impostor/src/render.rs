//! HTML pages.
//!
//! Plain `format!` rendering: four small pages, no template engine.
//! Every piece of user-supplied text goes through [`escape`].

use std::fmt::Write;

use impostor_session::{LobbyView, PlayerView, StatusView};

const STYLE: &str = "\
body{margin:0;background:#0f172a;color:#e5e7eb;font-family:system-ui,sans-serif}\
.wrap{max-width:720px;margin:24px auto;padding:16px}\
.card{background:#111827;border-radius:16px;padding:20px}\
.muted{color:#cbd5e1}.center{text-align:center}\
.pill{display:inline-block;border:1px solid #374151;padding:6px 10px;border-radius:999px;margin:4px 6px 0 0}\
.word{font-size:40px;font-weight:800}.imp{font-size:40px;font-weight:800;color:#ef4444}\
.btn{border:none;border-radius:12px;padding:10px 14px;cursor:pointer}\
.primary{background:#22c55e}.danger{background:#ef4444;color:#fff}\
form.inline{display:inline-block;margin-left:8px}\
label{display:block;margin:10px 0}a{color:#93c5fd}";

/// Escapes text for use in HTML content and quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body><div class=\"wrap\"><div class=\"card\">{body}</div></div></body></html>",
        title = escape(title),
    )
}

/// The join form plus everyone who has joined so far.
pub(crate) fn home_page(lobby: &LobbyView) -> String {
    let mut body = String::from(
        "<h1>Impostor</h1><p class=\"muted\">Enter your name. The Master \
         ticks the box and enters the master password.</p>\
         <form method=\"post\" action=\"/join\">\
         <label>Name <input type=\"text\" name=\"name\" required maxlength=\"40\"></label>",
    );

    if lobby.master_exists {
        body.push_str(
            "<label><input type=\"checkbox\" name=\"is_master\" disabled> \
             I am the Master <span class=\"muted\">(already taken)</span></label>",
        );
    } else {
        body.push_str(
            "<label><input type=\"checkbox\" name=\"is_master\"> I am the Master</label>\
             <label>Master password \
             <input type=\"password\" name=\"master_pwd\" autocomplete=\"off\"></label>",
        );
    }
    body.push_str(
        "<button class=\"btn primary\" type=\"submit\">Join</button> \
         <a href=\"/status\">Game status</a></form>",
    );

    if !lobby.players.is_empty() {
        body.push_str("<hr><h3>Players</h3>");
        for player in &lobby.players {
            let _ = write!(body, "<span class=\"pill\">{}", escape(player.name()));
            if player.is_master() {
                body.push_str(" &bull; Master");
            }
            body.push_str("</span>");
        }
    }

    layout("Impostor", &body)
}

/// A player's own page: the word, the impostor notice, or a wait message.
/// The Master also gets the round and reset buttons.
pub(crate) fn player_page(view: &PlayerView) -> String {
    let token = escape(view.player.token().as_str());
    let mut body = format!(
        "<h1>Hi {}</h1><p class=\"muted\">When the Master starts a round, \
         your information appears here.</p>",
        escape(view.player.name()),
    );

    let round = &view.round;
    if !round.is_active() {
        body.push_str("<p class=\"center\">Waiting for the Master to start&hellip;</p>");
    } else {
        if view.is_impostor {
            body.push_str(
                "<p class=\"center imp\">YOU ARE THE IMPOSTOR</p>\
                 <p class=\"center\">Pretend you know the word&hellip;</p>",
            );
        } else if let Some(word) = view.visible_word() {
            let _ = write!(
                body,
                "<p class=\"center muted\">The secret word is:</p>\
                 <p class=\"center word\">{}</p>",
                escape(word)
            );
        }
        let _ = write!(
            body,
            "<p class=\"center\"><small>Round #{}</small></p>",
            round.number()
        );
    }

    let _ = write!(
        body,
        "<div class=\"center\"><a class=\"btn\" href=\"/player/{token}\">Refresh</a>"
    );
    if view.is_master {
        let _ = write!(
            body,
            "<form method=\"post\" action=\"/start\" class=\"inline\">\
             <input type=\"hidden\" name=\"token\" value=\"{token}\">\
             <button class=\"btn primary\" type=\"submit\">New round</button></form>\
             <form method=\"post\" action=\"/reset\" class=\"inline\" \
             onsubmit=\"return confirm('Are you sure? Everything will be lost.')\">\
             <input type=\"hidden\" name=\"token\" value=\"{token}\">\
             <button class=\"btn danger\" type=\"submit\">Reset game</button></form>"
        );
    }
    body.push_str("</div>");

    layout("Impostor", &body)
}

/// Public overview: names and the round number, never the word.
pub(crate) fn status_page(status: &StatusView) -> String {
    let mut body = format!(
        "<h1>Game status</h1><p>Players ({}): ",
        status.players.len()
    );
    for player in &status.players {
        let _ = write!(body, "<span class=\"pill\">{}</span>", escape(player.name()));
    }
    let _ = write!(
        body,
        "</p><p>Current round: <strong>{}</strong>",
        status.round.number()
    );
    if status.round.secret().is_some() {
        body.push_str(" &bull; word selected");
    }
    body.push_str("</p><p><a href=\"/\">Back to home</a></p>");

    layout("Impostor - status", &body)
}

/// A short message with a link back. Used for errors.
pub(crate) fn message_page(message: &str, back: &str) -> String {
    let body = format!(
        "<p>{}</p><p><a href=\"{}\">Go back</a></p>",
        escape(message),
        escape(back)
    );
    layout("Impostor", &body)
}
