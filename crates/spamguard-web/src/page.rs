//! HTML rendering for the single-page form.

use std::fmt::Write;

use crate::handler::Outcome;

const TITLE: &str = "Deteksi Pesan Spam Tingkat Lanjut";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0 auto;max-width:1100px;padding:1.5rem;color:#222}
.cols{display:flex;gap:2rem;flex-wrap:wrap}.main{flex:2;min-width:320px}.side{flex:1;min-width:240px}
textarea{width:100%;height:200px;font-size:1rem;padding:.5rem;box-sizing:border-box}
button{width:100%;padding:.75rem;font-size:1rem;margin-top:.5rem;cursor:pointer}
.box{padding:.75rem 1rem;border-radius:6px;margin:.75rem 0}
.error{background:#fdecea}.warning{background:#fff4e5}.success{background:#edf7ed}.info{background:#e8f4fd}
.metric{font-size:2rem;font-weight:600}details{margin:.5rem 0}";

const HOW_IT_WORKS: &str = "\
<p>Aplikasi ini menggunakan model Machine Learning sederhana berbasis <b>Naive Bayes</b> \
dan <b>Bag-of-Words</b>. Prosesnya adalah:</p>\
<ol><li>Pesan Anda dibersihkan (huruf kecil, hapus URL, tanda baca, angka).</li>\
<li>Teks diubah menjadi format numerik yang bisa dimengerti model.</li>\
<li>Model memprediksi apakah pesan itu 'spam' atau 'ham'.</li></ol>";

const ABOUT_MODEL: &str = "\
<p>Model ini dilatih dengan <b>dataset dummy yang sangat kecil</b>. \
Ini berarti akurasinya mungkin tidak tinggi untuk semua jenis pesan spam di dunia nyata. \
Untuk deteksi yang lebih canggih, diperlukan:</p>\
<ul><li>Dataset spam/ham yang jauh lebih besar dan beragam.</li>\
<li>Teknik pra-pemrosesan teks yang lebih kompleks (misalnya, stemming, lemmatization).</li>\
<li>Model Machine Learning yang lebih canggih.</li></ul>";

/// Escapes text for safe inclusion in HTML element content and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders the result block for `outcome`.
pub fn render_outcome(outcome: &Outcome) -> String {
    if let Outcome::Warning { message } = outcome {
        return format!("<div class=\"box warning\">{}</div>", escape(message));
    }

    let mut html = String::from("<h3>Hasil Deteksi:</h3>");
    // write! into a String cannot fail
    let _ = match outcome {
        Outcome::Spam { .. } => write!(
            html,
            "<div class=\"box error\"><b>🔴 Pesan Ini Teridentifikasi sebagai SPAM!</b></div>\
             <div>Probabilitas SPAM</div><div class=\"metric\">{}</div><hr>\
             <div class=\"box warning\">🚨 <b>Peringatan:</b> Pesan ini memiliki karakteristik yang kuat \
             dari pesan spam. Harap berhati-hati dan jangan mengklik tautan atau memberikan informasi pribadi.</div>",
            outcome.percentage().unwrap_or_default()
        ),
        Outcome::Ham { .. } => write!(
            html,
            "<div class=\"box success\"><b>🟢 Pesan Ini Teridentifikasi sebagai HAM (Bukan Spam).</b></div>\
             <div>Probabilitas HAM</div><div class=\"metric\">{}</div><hr>\
             <div class=\"box info\">👍 Pesan ini terlihat aman. Namun, selalu verifikasi pengirim \
             jika Anda merasa ragu.</div>",
            outcome.percentage().unwrap_or_default()
        ),
        Outcome::Warning { .. } => Ok(()),
        Outcome::Error { message } => write!(
            html,
            "<div class=\"box error\">Terjadi kesalahan saat mendeteksi pesan: {}</div>",
            escape(message)
        ),
    };
    html
}

/// Renders the whole page, echoing `message` back into the text area.
pub fn render(outcome: Option<&Outcome>, message: &str) -> String {
    let result = outcome.map(render_outcome).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\
<html lang=\"id\"><head><meta charset=\"utf-8\"><title>{TITLE}</title>\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"><style>{STYLE}</style></head><body>\
<h1>🤖 Detektor Pesan SPAM Tingkat Lanjut</h1>\
<p>Aplikasi cerdas ini membantu Anda mengidentifikasi pesan yang mencurigakan. \
Cukup masukkan pesan teks, dan model kami akan memprediksi apakah itu <b>SPAM</b> atau <b>HAM (Bukan Spam)</b>.</p><hr>\
<div class=\"cols\"><div class=\"main\"><h2>📝 Masukkan Pesan Anda di Sini:</h2>\
<form method=\"post\" action=\"/\">\
<textarea name=\"message\" title=\"Tulis pesan yang ingin Anda deteksi di kotak ini.\" \
placeholder=\"Contoh: 'Selamat! Anda memenangkan hadiah! Klik link ini sekarang!' atau 'Rapat jam 10 pagi besok.'\">{message}</textarea>\
<button type=\"submit\">🚀 Deteksi Pesan Sekarang!</button></form>{result}</div>\
<div class=\"side\"><h2>💡 Informasi Aplikasi:</h2>\
<details><summary>Bagaimana Cara Kerja Detektor Ini?</summary>{HOW_IT_WORKS}</details>\
<details><summary>Tentang Model yang Digunakan:</summary>{ABOUT_MODEL}</details><hr>\
<p>Terima kasih sudah mencoba!</p></div></div></body></html>",
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("biasa saja"), "biasa saja");
    }

    #[test]
    fn empty_page_has_form_and_no_result() {
        let html = render(None, "");
        assert!(html.contains("<form method=\"post\" action=\"/\">"));
        assert!(html.contains("name=\"message\""));
        assert!(!html.contains("Hasil Deteksi"));
    }

    #[test]
    fn spam_result_shows_probability_and_caution() {
        let html = render(Some(&Outcome::Spam { probability: 0.9472 }), "klik link");
        assert!(html.contains("SPAM!"));
        assert!(html.contains("94.72%"));
        assert!(html.contains("Peringatan"));
        assert!(html.contains(">klik link</textarea>"));
    }

    #[test]
    fn ham_result_shows_probability() {
        let html = render_outcome(&Outcome::Ham { probability: 0.918 });
        assert!(html.contains("HAM (Bukan Spam)"));
        assert!(html.contains("91.80%"));
    }

    #[test]
    fn warning_has_no_result_heading() {
        let html = render_outcome(&Outcome::Warning {
            message: "kosong".into(),
        });
        assert!(!html.contains("Hasil Deteksi"));
        assert!(html.contains("kosong"));
    }

    #[test]
    fn echoed_message_is_escaped() {
        let html = render(None, "</textarea><b>");
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;</textarea>"));
    }
}
