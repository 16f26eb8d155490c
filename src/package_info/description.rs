//! Package description synthesis.

use super::analysis::{DeclarationKind, SourceUnitSummary};
use super::category::PackageCategory;
use super::naming::last_segment;
use crate::core::config::Locale;

/// Build the one-sentence description of a package.
///
/// The category picks a canned sentence; `General` falls back to the
/// title-cased final package segment. When units were found, a breakdown of
/// interfaces, classes and enums is appended. Records and annotation types are
/// listed in the header but never counted here.
pub fn describe_package(
    package_name: &str,
    units: &[SourceUnitSummary],
    category: PackageCategory,
    locale: Locale,
) -> String {
    let mut description = match category_sentence(category, locale) {
        Some(sentence) => sentence.to_string(),
        None => general_sentence(last_segment(package_name), locale),
    };

    if units.is_empty() {
        return description;
    }

    let count = |kind: DeclarationKind| units.iter().filter(|unit| unit.kind == Some(kind)).count();
    let breakdown: Vec<String> = [
        DeclarationKind::Interface,
        DeclarationKind::Class,
        DeclarationKind::Enum,
    ]
    .into_iter()
    .map(|kind| (kind, count(kind)))
    .filter(|(_, n)| *n > 0)
    .map(|(kind, n)| count_phrase(kind, n, locale))
    .collect();

    if !breakdown.is_empty() {
        match locale {
            Locale::Ja => {
                description.push_str(&format!("を提供します（{}）", breakdown.join(", ")));
            }
            Locale::En => {
                description.push_str(&format!(" ({})", breakdown.join(", ")));
            }
        }
    }

    description
}

fn category_sentence(category: PackageCategory, locale: Locale) -> Option<&'static str> {
    let sentence = match (locale, category) {
        (_, PackageCategory::General) => return None,
        (Locale::Ja, PackageCategory::Entity) => "データモデルとエンティティクラス",
        (Locale::Ja, PackageCategory::Mapper) => "データアクセス層のマッパーインターフェース",
        (Locale::Ja, PackageCategory::Service) => "ビジネスロジックを提供するサービスクラス",
        (Locale::Ja, PackageCategory::Controller) => "HTTPリクエストを処理するコントローラ",
        (Locale::Ja, PackageCategory::Util) => "ユーティリティクラスと補助機能",
        (Locale::Ja, PackageCategory::Config) => "アプリケーション設定クラス",
        (Locale::Ja, PackageCategory::Dto) => "データ転送オブジェクト (DTO)",
        (Locale::Ja, PackageCategory::Exception) => "例外クラスとエラーハンドリング",
        (Locale::En, PackageCategory::Entity) => "Data models and entity classes",
        (Locale::En, PackageCategory::Mapper) => "Mapper interfaces for the data access layer",
        (Locale::En, PackageCategory::Service) => "Service classes providing business logic",
        (Locale::En, PackageCategory::Controller) => "Controllers handling HTTP requests",
        (Locale::En, PackageCategory::Util) => "Utility classes and helper functions",
        (Locale::En, PackageCategory::Config) => "Application configuration classes",
        (Locale::En, PackageCategory::Dto) => "Data transfer objects (DTO)",
        (Locale::En, PackageCategory::Exception) => "Exception classes and error handling",
    };
    Some(sentence)
}

fn general_sentence(segment: &str, locale: Locale) -> String {
    match locale {
        Locale::Ja => format!("{}パッケージ", title_case(segment)),
        Locale::En => format!("{} package", title_case(segment)),
    }
}

fn count_phrase(kind: DeclarationKind, n: usize, locale: Locale) -> String {
    match locale {
        Locale::Ja => {
            let noun = match kind {
                DeclarationKind::Interface => "インターフェース",
                DeclarationKind::Enum => "列挙型",
                _ => "クラス",
            };
            format!("{n}個の{noun}")
        }
        Locale::En => {
            let (one, many) = match kind {
                DeclarationKind::Interface => ("interface", "interfaces"),
                DeclarationKind::Enum => ("enum", "enums"),
                _ => ("class", "classes"),
            };
            format!("{n} {}", if n == 1 { one } else { many })
        }
    }
}

/// Title-case `text`: uppercase every letter that follows a non-letter and
/// lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit(name: &str, kind: Option<DeclarationKind>) -> SourceUnitSummary {
        SourceUnitSummary {
            name: name.to_string(),
            kind,
            summary: None,
        }
    }

    #[test]
    fn category_sentence_without_units() {
        let text = describe_package("com.acme.service", &[], PackageCategory::Service, Locale::Ja);
        assert_eq!(text, "ビジネスロジックを提供するサービスクラス");
    }

    #[test]
    fn general_uses_title_cased_segment() {
        let text = describe_package("com.acme.billing", &[], PackageCategory::General, Locale::Ja);
        assert_eq!(text, "Billingパッケージ");
        let text = describe_package("com.acme.billing", &[], PackageCategory::General, Locale::En);
        assert_eq!(text, "Billing package");
    }

    #[test]
    fn breakdown_counts_interfaces_classes_enums_in_order() {
        let units = vec![
            unit("A", Some(DeclarationKind::Class)),
            unit("B", Some(DeclarationKind::Interface)),
            unit("C", Some(DeclarationKind::Class)),
            unit("D", Some(DeclarationKind::Enum)),
            unit("E", Some(DeclarationKind::Record)),
        ];
        let text = describe_package("com.acme.mapper", &units, PackageCategory::Mapper, Locale::Ja);
        assert_eq!(
            text,
            "データアクセス層のマッパーインターフェースを提供します（1個のインターフェース, 2個のクラス, 1個の列挙型）"
        );

        let text = describe_package("com.acme.mapper", &units, PackageCategory::Mapper, Locale::En);
        assert_eq!(
            text,
            "Mapper interfaces for the data access layer (1 interface, 2 classes, 1 enum)"
        );
    }

    #[test]
    fn zero_counts_are_omitted() {
        let units = vec![unit("Status", Some(DeclarationKind::Enum))];
        let text = describe_package("com.acme.enums", &units, PackageCategory::General, Locale::Ja);
        assert_eq!(text, "Enumsパッケージを提供します（1個の列挙型）");
    }

    #[test]
    fn uncounted_kinds_add_no_breakdown() {
        let units = vec![
            unit("Point", Some(DeclarationKind::Record)),
            unit("Hidden", None),
        ];
        let text = describe_package("com.acme.dto", &units, PackageCategory::Dto, Locale::En);
        assert_eq!(text, "Data transfer objects (DTO)");
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("service"), "Service");
        assert_eq!(title_case("user profile"), "User Profile");
        assert_eq!(title_case("xmlParser"), "Xmlparser");
        assert_eq!(title_case("v2api"), "V2Api");
        assert_eq!(title_case(""), "");
    }

    proptest! {
        #[test]
        fn title_case_is_idempotent(text in "[a-zA-Z0-9 _]{0,24}") {
            let once = title_case(&text);
            prop_assert_eq!(title_case(&once), once.clone());
            prop_assert_eq!(once.chars().count(), text.chars().count());
        }
    }
}
