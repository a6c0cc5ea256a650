// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// the `Bidi_Mirroring_Glyph` property of the brackets, quotation marks
// and relations that are commonly used as delimiters.
//
// both directions are listed, sorted by the code point of the first char.
// ref:
// https://www.unicode.org/Public/UCD/latest/ucd/BidiMirroring.txt
const MIRROR_GLYPHS: &[(char, char)] = &[
    ('\u{0028}', '\u{0029}'), // ( )
    ('\u{0029}', '\u{0028}'),
    ('\u{003C}', '\u{003E}'), // < >
    ('\u{003E}', '\u{003C}'),
    ('\u{005B}', '\u{005D}'), // [ ]
    ('\u{005D}', '\u{005B}'),
    ('\u{007B}', '\u{007D}'), // { }
    ('\u{007D}', '\u{007B}'),
    ('\u{00AB}', '\u{00BB}'), // « »
    ('\u{00BB}', '\u{00AB}'),
    ('\u{0F3A}', '\u{0F3B}'), // tibetan gug rtags
    ('\u{0F3B}', '\u{0F3A}'),
    ('\u{0F3C}', '\u{0F3D}'), // tibetan ang khang
    ('\u{0F3D}', '\u{0F3C}'),
    ('\u{169B}', '\u{169C}'), // ogham feather marks
    ('\u{169C}', '\u{169B}'),
    ('\u{2039}', '\u{203A}'), // ‹ ›
    ('\u{203A}', '\u{2039}'),
    ('\u{2045}', '\u{2046}'), // ⁅ ⁆
    ('\u{2046}', '\u{2045}'),
    ('\u{207D}', '\u{207E}'), // ⁽ ⁾
    ('\u{207E}', '\u{207D}'),
    ('\u{208D}', '\u{208E}'), // ₍ ₎
    ('\u{208E}', '\u{208D}'),
    ('\u{2208}', '\u{220B}'), // ∈ ∋
    ('\u{2209}', '\u{220C}'), // ∉ ∌
    ('\u{220A}', '\u{220D}'), // ∊ ∍
    ('\u{220B}', '\u{2208}'),
    ('\u{220C}', '\u{2209}'),
    ('\u{220D}', '\u{220A}'),
    ('\u{2264}', '\u{2265}'), // ≤ ≥
    ('\u{2265}', '\u{2264}'),
    ('\u{2266}', '\u{2267}'), // ≦ ≧
    ('\u{2267}', '\u{2266}'),
    ('\u{226A}', '\u{226B}'), // ≪ ≫
    ('\u{226B}', '\u{226A}'),
    ('\u{2282}', '\u{2283}'), // ⊂ ⊃
    ('\u{2283}', '\u{2282}'),
    ('\u{2286}', '\u{2287}'), // ⊆ ⊇
    ('\u{2287}', '\u{2286}'),
    ('\u{2308}', '\u{2309}'), // ⌈ ⌉
    ('\u{2309}', '\u{2308}'),
    ('\u{230A}', '\u{230B}'), // ⌊ ⌋
    ('\u{230B}', '\u{230A}'),
    ('\u{2329}', '\u{232A}'), // 〈 〉
    ('\u{232A}', '\u{2329}'),
    ('\u{2768}', '\u{2769}'), // ornamental brackets
    ('\u{2769}', '\u{2768}'),
    ('\u{276A}', '\u{276B}'),
    ('\u{276B}', '\u{276A}'),
    ('\u{276C}', '\u{276D}'),
    ('\u{276D}', '\u{276C}'),
    ('\u{276E}', '\u{276F}'),
    ('\u{276F}', '\u{276E}'),
    ('\u{2770}', '\u{2771}'),
    ('\u{2771}', '\u{2770}'),
    ('\u{2772}', '\u{2773}'),
    ('\u{2773}', '\u{2772}'),
    ('\u{2774}', '\u{2775}'),
    ('\u{2775}', '\u{2774}'),
    ('\u{27E6}', '\u{27E7}'), // ⟦ ⟧
    ('\u{27E7}', '\u{27E6}'),
    ('\u{27E8}', '\u{27E9}'), // ⟨ ⟩
    ('\u{27E9}', '\u{27E8}'),
    ('\u{27EA}', '\u{27EB}'), // ⟪ ⟫
    ('\u{27EB}', '\u{27EA}'),
    ('\u{27EC}', '\u{27ED}'), // ⟬ ⟭
    ('\u{27ED}', '\u{27EC}'),
    ('\u{27EE}', '\u{27EF}'), // ⟮ ⟯
    ('\u{27EF}', '\u{27EE}'),
    ('\u{2983}', '\u{2984}'), // ⦃ ⦄
    ('\u{2984}', '\u{2983}'),
    ('\u{2985}', '\u{2986}'), // ⦅ ⦆
    ('\u{2986}', '\u{2985}'),
    ('\u{2987}', '\u{2988}'), // ⦇ ⦈
    ('\u{2988}', '\u{2987}'),
    ('\u{2989}', '\u{298A}'), // ⦉ ⦊
    ('\u{298A}', '\u{2989}'),
    ('\u{298B}', '\u{298C}'), // ⦋ ⦌
    ('\u{298C}', '\u{298B}'),
    ('\u{298D}', '\u{2990}'), // ⦍ ⦐
    ('\u{298E}', '\u{298F}'), // ⦎ ⦏
    ('\u{298F}', '\u{298E}'),
    ('\u{2990}', '\u{298D}'),
    ('\u{3008}', '\u{3009}'), // 〈 〉
    ('\u{3009}', '\u{3008}'),
    ('\u{300A}', '\u{300B}'), // 《 》
    ('\u{300B}', '\u{300A}'),
    ('\u{300C}', '\u{300D}'), // 「 」
    ('\u{300D}', '\u{300C}'),
    ('\u{300E}', '\u{300F}'), // 『 』
    ('\u{300F}', '\u{300E}'),
    ('\u{3010}', '\u{3011}'), // 【 】
    ('\u{3011}', '\u{3010}'),
    ('\u{3014}', '\u{3015}'), // 〔 〕
    ('\u{3015}', '\u{3014}'),
    ('\u{3016}', '\u{3017}'), // 〖 〗
    ('\u{3017}', '\u{3016}'),
    ('\u{3018}', '\u{3019}'), // 〘 〙
    ('\u{3019}', '\u{3018}'),
    ('\u{301A}', '\u{301B}'), // 〚 〛
    ('\u{301B}', '\u{301A}'),
    ('\u{FF08}', '\u{FF09}'), // fullwidth ( )
    ('\u{FF09}', '\u{FF08}'),
    ('\u{FF1C}', '\u{FF1E}'), // fullwidth < >
    ('\u{FF1E}', '\u{FF1C}'),
    ('\u{FF3B}', '\u{FF3D}'), // fullwidth [ ]
    ('\u{FF3D}', '\u{FF3B}'),
    ('\u{FF5B}', '\u{FF5D}'), // fullwidth { }
    ('\u{FF5D}', '\u{FF5B}'),
    ('\u{FF5F}', '\u{FF60}'), // fullwidth white parentheses
    ('\u{FF60}', '\u{FF5F}'),
    ('\u{FF62}', '\u{FF63}'), // halfwidth corner brackets
    ('\u{FF63}', '\u{FF62}'),
];

/// The mirror glyph of `c`, or `c` itself when it has none.
pub fn mirror_char(c: char) -> char {
    match MIRROR_GLYPHS.binary_search_by_key(&c, |(from, _)| *from) {
        Ok(idx) => MIRROR_GLYPHS[idx].1,
        Err(_) => c,
    }
}

/// Guess the closing delimiter of `opening` by reversing it and
/// mirroring every char, e.g. `<{` -> `}>`.
///
/// It never fails, chars without a mirror glyph are kept as they are,
/// so the result is only a guess until it is found in the text.
pub fn unicode_mirror(opening: &str) -> String {
    opening.chars().rev().map(mirror_char).collect()
}

/// Whether `c` has a mirror glyph different from itself.
pub fn is_mirrored(c: char) -> bool {
    mirror_char(c) != c
}
