//! # Surah Catalog
//!
//! Fixed reference data for the 114 surahs: numeric id, the canonical
//! transliterated name the backend stores, and the localized (Turkish) names
//! the backend and the mobile app also use.
//!
//! The table is plain data so completeness can be asserted by tests rather
//! than trusted. Aliases are stored lowercase; lookups fold case
//! with `surah::fold_name`.

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u16 = 114;

/// One surah of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub id: u16,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Surah {
    const fn new(id: u16, name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { id, name, aliases }
    }
}

/// All surahs, ordered by id. `SURAHS[i].id == i + 1`.
pub static SURAHS: [Surah; SURAH_COUNT as usize] = [
    Surah::new(1, "Al-Faatiha", &["fatiha"]),
    Surah::new(2, "Al-Baqara", &["bakara"]),
    Surah::new(3, "Aal-i-Imraan", &["al-i imran"]),
    Surah::new(4, "An-Nisaa", &["nisa"]),
    Surah::new(5, "Al-Maida", &["maide"]),
    Surah::new(6, "Al-An'aam", &["en'am"]),
    Surah::new(7, "Al-A'raaf", &["a'raf"]),
    Surah::new(8, "Al-Anfaal", &["enfal"]),
    Surah::new(9, "At-Tawba", &["tevbe"]),
    Surah::new(10, "Yunus", &["yunus"]),
    Surah::new(11, "Hud", &["hud"]),
    Surah::new(12, "Yusuf", &["yusuf"]),
    Surah::new(13, "Ar-Ra'd", &["ra'd"]),
    Surah::new(14, "Ibrahim", &["ibrahim"]),
    Surah::new(15, "Al-Hijr", &["hicr"]),
    Surah::new(16, "An-Nahl", &["nahl"]),
    Surah::new(17, "Al-Israa", &["isra"]),
    Surah::new(18, "Al-Kahf", &["kehf"]),
    Surah::new(19, "Maryam", &["meryem"]),
    Surah::new(20, "Ta-Ha", &["taha"]),
    Surah::new(21, "Al-Anbiya", &["enbiya"]),
    Surah::new(22, "Al-Hajj", &["hac"]),
    Surah::new(23, "Al-Mu'minoon", &["mü'minun"]),
    Surah::new(24, "An-Noor", &["nur"]),
    Surah::new(25, "Al-Furqan", &["furkan"]),
    Surah::new(26, "Ash-Shu'ara", &["şuara"]),
    Surah::new(27, "An-Naml", &["neml"]),
    Surah::new(28, "Al-Qasas", &["kasas"]),
    Surah::new(29, "Al-Ankaboot", &["ankebut"]),
    Surah::new(30, "Ar-Rum", &["rum"]),
    Surah::new(31, "Luqman", &["lokman"]),
    Surah::new(32, "As-Sajda", &["secde"]),
    Surah::new(33, "Al-Ahzaab", &["ahzab"]),
    Surah::new(34, "Saba", &["sebe"]),
    Surah::new(35, "Faatir", &["fatır"]),
    Surah::new(36, "Yaseen", &["yasin"]),
    Surah::new(37, "As-Saaffaat", &["saffat"]),
    Surah::new(38, "Saad", &["sad"]),
    Surah::new(39, "Az-Zumar", &["zümer"]),
    Surah::new(40, "Ghafir", &["mümin"]),
    Surah::new(41, "Fussilat", &["fussilet"]),
    Surah::new(42, "Ash-Shura", &["şura"]),
    Surah::new(43, "Az-Zukhruf", &["zuhruf"]),
    Surah::new(44, "Ad-Dukhaan", &["duhan"]),
    Surah::new(45, "Al-Jaathiya", &["casiye"]),
    Surah::new(46, "Al-Ahqaf", &["ahkaf"]),
    Surah::new(47, "Muhammad", &["muhammed"]),
    Surah::new(48, "Al-Fath", &["fetih"]),
    Surah::new(49, "Al-Hujuraat", &["hucurat"]),
    Surah::new(50, "Qaaf", &["kaf"]),
    Surah::new(51, "Adh-Dhaariyat", &["zariyat"]),
    Surah::new(52, "At-Tur", &["tur"]),
    Surah::new(53, "An-Najm", &["necm"]),
    Surah::new(54, "Al-Qamar", &["kamer"]),
    Surah::new(55, "Ar-Rahman", &["rahman"]),
    Surah::new(56, "Al-Waqia", &["vakia"]),
    Surah::new(57, "Al-Hadid", &["hadid"]),
    Surah::new(58, "Al-Mujadila", &["mücadele"]),
    Surah::new(59, "Al-Hashr", &["haşr"]),
    Surah::new(60, "Al-Mumtahina", &["mümtehine"]),
    Surah::new(61, "As-Saff", &["saff"]),
    Surah::new(62, "Al-Jumua", &["cuma"]),
    Surah::new(63, "Al-Munafiqoon", &["münafikun"]),
    Surah::new(64, "At-Taghabun", &["tegabun"]),
    Surah::new(65, "At-Talaq", &["talak"]),
    Surah::new(66, "At-Tahrim", &["tahrim"]),
    Surah::new(67, "Al-Mulk", &["mülk"]),
    Surah::new(68, "Al-Qalam", &["kalem"]),
    Surah::new(69, "Al-Haaqqa", &["hakka"]),
    Surah::new(70, "Al-Maarij", &["mearic"]),
    Surah::new(71, "Nuh", &["nuh"]),
    Surah::new(72, "Al-Jinn", &["cin"]),
    Surah::new(73, "Al-Muzzammil", &["müzzemmil"]),
    Surah::new(74, "Al-Muddathir", &["müddessir"]),
    Surah::new(75, "Al-Qiyama", &["kıyamet"]),
    Surah::new(76, "Al-Insan", &["insan"]),
    Surah::new(77, "Al-Mursalat", &["mürselat"]),
    Surah::new(78, "An-Naba", &["nebe"]),
    Surah::new(79, "An-Nazi'at", &["naziat"]),
    Surah::new(80, "Abasa", &["abese"]),
    Surah::new(81, "At-Takwir", &["tekvir"]),
    Surah::new(82, "Al-Infitar", &["infitar"]),
    Surah::new(83, "Al-Mutaffifin", &["mutaffifin"]),
    Surah::new(84, "Al-Inshiqaq", &["inşikak"]),
    Surah::new(85, "Al-Burooj", &["büruc"]),
    Surah::new(86, "At-Tariq", &["tarık"]),
    Surah::new(87, "Al-Ala", &["ala"]),
    Surah::new(88, "Al-Ghashiya", &["gaşiye"]),
    Surah::new(89, "Al-Fajr", &["fecr"]),
    Surah::new(90, "Al-Balad", &["beled"]),
    Surah::new(91, "Ash-Shams", &["şems"]),
    Surah::new(92, "Al-Lail", &["leyl"]),
    Surah::new(93, "Ad-Duha", &["duha"]),
    Surah::new(94, "Ash-Sharh", &["inşirah"]),
    Surah::new(95, "At-Tin", &["tin"]),
    Surah::new(96, "Al-Alaq", &["alak"]),
    Surah::new(97, "Al-Qadr", &["kadir"]),
    Surah::new(98, "Al-Bayyina", &["beyyine"]),
    Surah::new(99, "Az-Zalzalah", &["zilzal"]),
    Surah::new(100, "Al-Adiyat", &["adiyat"]),
    Surah::new(101, "Al-Qaria", &["karia"]),
    Surah::new(102, "At-Takathur", &["tekasur"]),
    Surah::new(103, "Al-Asr", &["asr"]),
    Surah::new(104, "Al-Humazah", &["hümeze"]),
    Surah::new(105, "Al-Fil", &["fil"]),
    Surah::new(106, "Quraish", &["kureyş"]),
    Surah::new(107, "Al-Ma'un", &["maun"]),
    Surah::new(108, "Al-Kawthar", &["kevser"]),
    Surah::new(109, "Al-Kafiroon", &["kafirun"]),
    Surah::new(110, "An-Nasr", &["nasr"]),
    Surah::new(111, "Al-Masad", &["tebbet"]),
    Surah::new(112, "Al-Ikhlas", &["ihlas"]),
    Surah::new(113, "Al-Falaq", &["felak"]),
    Surah::new(114, "An-Nas", &["nas"]),
];

/// Look up a surah by id.
pub fn by_id(id: u16) -> Option<&'static Surah> {
    match id {
        1..=SURAH_COUNT => SURAHS.get(usize::from(id) - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_dense_and_ordered() {
        for (idx, surah) in SURAHS.iter().enumerate() {
            assert_eq!(usize::from(surah.id), idx + 1, "{}", surah.name);
        }
    }

    #[test]
    fn test_every_surah_has_one_alias() {
        for surah in &SURAHS {
            assert_eq!(surah.aliases.len(), 1, "{}", surah.name);
        }
    }

    #[test]
    fn test_aliases_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for surah in &SURAHS {
            for alias in surah.aliases {
                assert_eq!(*alias, alias.to_lowercase(), "{}", alias);
                assert_eq!(*alias, alias.trim(), "{}", alias);
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
        assert_eq!(seen.len(), 114);
    }

    #[test]
    fn test_canonical_names_are_unique_case_insensitively() {
        let names: HashSet<String> = SURAHS.iter().map(|s| s.name.to_lowercase()).collect();
        assert_eq!(names.len(), 114);
    }

    #[test]
    fn test_by_id_bounds() {
        assert_eq!(by_id(1).map(|s| s.name), Some("Al-Faatiha"));
        assert_eq!(by_id(36).map(|s| s.aliases[0]), Some("yasin"));
        assert_eq!(by_id(114).map(|s| s.name), Some("An-Nas"));
        assert!(by_id(0).is_none());
        assert!(by_id(115).is_none());
    }
}
