//! Labelled message samples: the built-in corpus and a TSV loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamGuardError};
use crate::types::Label;

/// A single labelled message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub text: String,
    pub label: Label,
}

impl Sample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

const BUILTIN: &[(&str, Label)] = &[
    ("Selamat! Anda memenangkan undian berhadiah! Klik link ini: bit.ly/undianpalsu", Label::Spam),
    ("Halo, apa kabar? Mau makan siang bersama?", Label::Ham),
    ("Peringatan! Akun bank Anda disusupi. Segera verifikasi di sini: bank-palsu.com", Label::Spam),
    ("Ingatkan rapat jam 3 sore. Jangan lupa laporan bulanan.", Label::Ham),
    ("Dapatkan hadiah jutaan rupiah! Balas YA ke 9999 sekarang!", Label::Spam),
    ("Bisakah kita jadwalkan ulang panggilan untuk besok?", Label::Ham),
    ("Penawaran eksklusif khusus untuk Anda! Waktu terbatas!", Label::Spam),
    ("Terima kasih atas pembaruan. Semuanya terlihat bagus.", Label::Ham),
    ("Anda memiliki pesan baru. Lihat sekarang juga!", Label::Spam),
    ("Hai, apakah Anda sibuk akhir pekan ini?", Label::Ham),
    ("Ini kesempatan terakhir Anda untuk klaim hadiah besar!", Label::Spam),
    ("Mari kita minum kopi nanti sore?", Label::Ham),
    ("Promo pulsa gratis! Cukup isi ulang 5 ribu dapat 100 ribu!", Label::Spam),
    ("Mohon konfirmasi identitas Anda dengan mengklik tautan ini.", Label::Spam),
    ("Sampai jumpa nanti!", Label::Ham),
    ("Pengiriman pesanan Amazon Anda tertunda. Lacak di sini: link-phishing.biz", Label::Spam),
    ("Tenggat waktu proyek adalah Senin depan.", Label::Ham),
    ("Pangeran Nigeria ingin berbagi kekayaan dengan Anda.", Label::Spam),
    ("Hubungi saya segera. Ada hal penting.", Label::Ham),
    ("Langganan Netflix Anda telah kedaluwarsa. Perbarui detail pembayaran Anda sekarang!", Label::Spam),
];

/// The fixed 20-message Indonesian training corpus (11 spam, 9 ham).
pub fn builtin() -> Vec<Sample> {
    BUILTIN
        .iter()
        .map(|&(text, label)| Sample::new(text, label))
        .collect()
}

/// Load samples from a `label<TAB>text` file.
///
/// Blank lines and lines starting with `#` are skipped. Labels accept
/// `ham`/`spam` or `0`/`1`.
pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, text) = line.split_once('\t').ok_or_else(|| SpamGuardError::Dataset {
            line: idx + 1,
            reason: "expected `label<TAB>text`".into(),
        })?;
        let label: Label = label.parse().map_err(|e: crate::types::ParseLabelError| {
            SpamGuardError::Dataset {
                line: idx + 1,
                reason: e.to_string(),
            }
        })?;

        samples.push(Sample::new(text.trim(), label));
    }

    Ok(samples)
}

/// Split samples into parallel text and label vectors.
pub fn unzip(samples: &[Sample]) -> (Vec<&str>, Vec<Label>) {
    samples
        .iter()
        .map(|s| (s.text.as_str(), s.label))
        .unzip()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_has_twenty_samples() {
        let samples = builtin();
        assert_eq!(samples.len(), 20);
        let spam = samples.iter().filter(|s| s.label.is_spam()).count();
        assert_eq!(spam, 11);
        assert_eq!(samples.len() - spam, 9);
    }

    #[test]
    fn load_tsv_parses_labels_and_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# label\ttext").unwrap();
        writeln!(file, "spam\tGratis pulsa!").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0\tRapat jam 9").unwrap();

        let samples = load_tsv(file.path()).unwrap();
        assert_eq!(
            samples,
            vec![
                Sample::new("Gratis pulsa!", Label::Spam),
                Sample::new("Rapat jam 9", Label::Ham),
            ]
        );
    }

    #[test]
    fn load_tsv_reports_bad_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spam\tok").unwrap();
        writeln!(file, "phishing\tnope").unwrap();

        let err = load_tsv(file.path()).unwrap_err();
        assert!(matches!(err, SpamGuardError::Dataset { line: 2, .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no tab here").unwrap();
        let err = load_tsv(file.path()).unwrap_err();
        assert!(matches!(err, SpamGuardError::Dataset { line: 1, .. }));
    }

    #[test]
    fn load_tsv_missing_file_is_io_error() {
        let err = load_tsv("/definitely/not/here.tsv").unwrap_err();
        assert!(matches!(err, SpamGuardError::Io(_)));
    }
}
