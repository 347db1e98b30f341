/*!
 * Tests for the public line predicates and classification
 */

use kotoba_filter::{
    has_latin_letters, has_quoted_latin_word, has_roman_numeral, Classification, FilterMode,
    LineFilter, RejectionReason,
};

#[test]
fn test_hasLatinLetters_withJapaneseAndTrailingLetter_shouldDetectLetter() {
    assert!(!has_latin_letters("こんにちは"));
    assert!(has_latin_letters("こんにちはA"));
}

#[test]
fn test_hasRomanNumeral_withStandaloneToken_shouldReturnTrue() {
    assert!(has_roman_numeral("章III"));
    assert!(has_roman_numeral("xiv"));
}

#[test]
fn test_hasRomanNumeral_withOrdinaryWord_shouldReturnFalse() {
    assert!(!has_roman_numeral("VISA"));
    assert!(!has_roman_numeral("Max"));
}

#[test]
fn test_hasQuotedLatinWord_withSpellName_shouldReturnTrue() {
    assert!(has_quoted_latin_word("彼は「Protego」と言った"));
    assert!(!has_quoted_latin_word("彼はプロテゴと言った"));
}

#[test]
fn test_classify_strict_withNonAsciiNumeralOrQuote_shouldAccept() {
    assert!(FilterMode::Strict.classify("第Ⅲ章").is_accepted());
    assert!(FilterMode::Strict.classify("「Ｌｕｍｏｓ」と唱えた").is_accepted());
}

#[test]
fn test_classify_lineMatchingEveryCheck_shouldUseFirstReason() {
    // "「MIX」" has Latin letters, a Roman token and a quoted word
    let line = "「MIX」";
    assert!(has_latin_letters(line));
    assert!(has_roman_numeral(line));
    assert!(has_quoted_latin_word(line));
    assert_eq!(
        FilterMode::Strict.classify(line),
        Classification::Rejected(RejectionReason::Latin)
    );
}

#[test]
fn test_filterContent_everyLine_shouldLandInExactlyOneCategory() {
    let content = "一\n\nA\n第IV章\n「Xyz」\n  \n二\nb c\n";
    let result = LineFilter::new(FilterMode::Strict).filter_content(content);
    let summary = &result.summary;

    assert_eq!(summary.total_lines, 6);
    assert_eq!(summary.kept + summary.removed(), summary.total_lines);
    assert_eq!(result.kept_lines, vec!["一", "二"]);
    assert_eq!(summary.count_for(RejectionReason::Latin), 4);
    assert_eq!(summary.count_for(RejectionReason::Roman), 0);
    assert_eq!(summary.count_for(RejectionReason::QuotedLatin), 0);
}

#[test]
fn test_filterContent_onOwnOutput_shouldBeIdempotent() {
    let content = "こんにちは\nabc\n第II部\n「Ok」\n第Ⅱ部\n静かな夜\n\n";
    for mode in [FilterMode::Quick, FilterMode::Strict, FilterMode::Legacy] {
        let filter = LineFilter::new(mode);
        let first = filter.filter_content(content);
        let second = filter.filter_content(&first.kept_lines.join("\n"));

        assert_eq!(second.kept_lines, first.kept_lines);
        assert!(!second.summary.has_rejections());
    }
}
