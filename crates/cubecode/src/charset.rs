//! The Cube 2 character set.
//!
//! Sauerbraten squeezes the Latin-1, Latin Extended-A and Cyrillic letters its
//! players need into a single byte. Printable ASCII, NUL and the `\t`..`\r`
//! controls keep their usual values, so colour escapes (`\f`) and plain ASCII
//! text decode unchanged; the remaining control slots and the upper half carry
//! the accented and Cyrillic letters.

/// Maps a byte of the Cube 2 character set to its Unicode scalar value.
pub static CUBE_TO_UNI: [char; 256] = [
    '\u{0}', '\u{C0}', '\u{C1}', '\u{C2}', '\u{C3}', '\u{C4}', '\u{C5}', '\u{C6}',
    '\u{C7}', '\u{9}', '\u{A}', '\u{B}', '\u{C}', '\u{D}', '\u{C8}', '\u{C9}',
    '\u{CA}', '\u{CB}', '\u{CC}', '\u{CD}', '\u{CE}', '\u{CF}', '\u{D1}', '\u{D2}',
    '\u{D3}', '\u{D4}', '\u{D5}', '\u{D6}', '\u{D8}', '\u{D9}', '\u{DA}', '\u{DB}',
    '\u{20}', '\u{21}', '\u{22}', '\u{23}', '\u{24}', '\u{25}', '\u{26}', '\u{27}',
    '\u{28}', '\u{29}', '\u{2A}', '\u{2B}', '\u{2C}', '\u{2D}', '\u{2E}', '\u{2F}',
    '\u{30}', '\u{31}', '\u{32}', '\u{33}', '\u{34}', '\u{35}', '\u{36}', '\u{37}',
    '\u{38}', '\u{39}', '\u{3A}', '\u{3B}', '\u{3C}', '\u{3D}', '\u{3E}', '\u{3F}',
    '\u{40}', '\u{41}', '\u{42}', '\u{43}', '\u{44}', '\u{45}', '\u{46}', '\u{47}',
    '\u{48}', '\u{49}', '\u{4A}', '\u{4B}', '\u{4C}', '\u{4D}', '\u{4E}', '\u{4F}',
    '\u{50}', '\u{51}', '\u{52}', '\u{53}', '\u{54}', '\u{55}', '\u{56}', '\u{57}',
    '\u{58}', '\u{59}', '\u{5A}', '\u{5B}', '\u{5C}', '\u{5D}', '\u{5E}', '\u{5F}',
    '\u{60}', '\u{61}', '\u{62}', '\u{63}', '\u{64}', '\u{65}', '\u{66}', '\u{67}',
    '\u{68}', '\u{69}', '\u{6A}', '\u{6B}', '\u{6C}', '\u{6D}', '\u{6E}', '\u{6F}',
    '\u{70}', '\u{71}', '\u{72}', '\u{73}', '\u{74}', '\u{75}', '\u{76}', '\u{77}',
    '\u{78}', '\u{79}', '\u{7A}', '\u{7B}', '\u{7C}', '\u{7D}', '\u{7E}', '\u{DC}',
    '\u{DD}', '\u{DF}', '\u{E0}', '\u{E1}', '\u{E2}', '\u{E3}', '\u{E4}', '\u{E5}',
    '\u{E6}', '\u{E7}', '\u{E8}', '\u{E9}', '\u{EA}', '\u{EB}', '\u{EC}', '\u{ED}',
    '\u{EE}', '\u{EF}', '\u{F1}', '\u{F2}', '\u{F3}', '\u{F4}', '\u{F5}', '\u{F6}',
    '\u{F8}', '\u{F9}', '\u{FA}', '\u{FB}', '\u{FC}', '\u{FD}', '\u{FF}', '\u{104}',
    '\u{105}', '\u{106}', '\u{107}', '\u{10C}', '\u{10D}', '\u{10E}', '\u{10F}', '\u{118}',
    '\u{119}', '\u{11A}', '\u{11B}', '\u{11E}', '\u{11F}', '\u{130}', '\u{131}', '\u{141}',
    '\u{142}', '\u{143}', '\u{144}', '\u{147}', '\u{148}', '\u{150}', '\u{151}', '\u{152}',
    '\u{153}', '\u{158}', '\u{159}', '\u{15A}', '\u{15B}', '\u{15E}', '\u{15F}', '\u{160}',
    '\u{161}', '\u{164}', '\u{165}', '\u{16E}', '\u{16F}', '\u{170}', '\u{171}', '\u{178}',
    '\u{179}', '\u{17A}', '\u{17B}', '\u{17C}', '\u{17D}', '\u{17E}', '\u{404}', '\u{411}',
    '\u{413}', '\u{414}', '\u{416}', '\u{417}', '\u{418}', '\u{419}', '\u{41B}', '\u{41F}',
    '\u{423}', '\u{424}', '\u{426}', '\u{427}', '\u{428}', '\u{429}', '\u{42A}', '\u{42B}',
    '\u{42C}', '\u{42D}', '\u{42E}', '\u{42F}', '\u{431}', '\u{432}', '\u{433}', '\u{434}',
    '\u{436}', '\u{437}', '\u{438}', '\u{439}', '\u{43A}', '\u{43B}', '\u{43C}', '\u{43D}',
    '\u{43F}', '\u{442}', '\u{444}', '\u{446}', '\u{447}', '\u{448}', '\u{449}', '\u{44A}',
    '\u{44B}', '\u{44C}', '\u{44D}', '\u{44E}', '\u{44F}', '\u{454}', '\u{490}', '\u{491}',
];

/// Looks up `byte` in [`CUBE_TO_UNI`].
#[inline]
#[must_use]
pub fn cube_to_char(byte: u8) -> char {
    CUBE_TO_UNI[usize::from(byte)]
}
