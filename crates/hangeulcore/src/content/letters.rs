//! Embedded Hangeul alphabet entries.
//!
//! Order here is the order of the buttons on the letter menu.

pub(crate) static LETTERS: &[(&str, &str)] = &[
    // Basic consonants
    (
        "ㄱ",
        "Nomi: 기역 (giyeok)\nTalaffuzi: so‘z boshida [k], unlilar orasida [g].\nMisol: 가방 — sumka, 고기 — go‘sht",
    ),
    (
        "ㄴ",
        "Nomi: 니은 (nieun)\nTalaffuzi: [n], o‘zbekcha «n» kabi.\nMisol: 나무 — daraxt, 누나 — opa",
    ),
    (
        "ㄷ",
        "Nomi: 디귿 (digeut)\nTalaffuzi: so‘z boshida [t], unlilar orasida [d].\nMisol: 다리 — oyoq, ko‘prik; 도시 — shahar",
    ),
    (
        "ㄹ",
        "Nomi: 리을 (rieul)\nTalaffuzi: unlilar orasida [r], bo‘g‘in oxirida [l].\nMisol: 라면 — ramyon, 물 — suv",
    ),
    (
        "ㅁ",
        "Nomi: 미음 (mieum)\nTalaffuzi: [m].\nMisol: 마음 — qalb, 머리 — bosh",
    ),
    (
        "ㅂ",
        "Nomi: 비읍 (bieup)\nTalaffuzi: so‘z boshida [p], unlilar orasida [b].\nMisol: 바다 — dengiz, 비 — yomg‘ir",
    ),
    (
        "ㅅ",
        "Nomi: 시옷 (siot)\nTalaffuzi: [s], ㅣ oldidan [sh] ga yaqin.\nMisol: 사람 — odam, 시간 — vaqt",
    ),
    (
        "ㅇ",
        "Nomi: 이응 (ieung)\nTalaffuzi: bo‘g‘in boshida o‘qilmaydi, oxirida [ng].\nMisol: 아이 — bola, 강 — daryo",
    ),
    (
        "ㅈ",
        "Nomi: 지읒 (jieut)\nTalaffuzi: so‘z boshida [ch] ga yaqin, unlilar orasida [j].\nMisol: 자리 — o‘rin, 주스 — sharbat",
    ),
    (
        "ㅊ",
        "Nomi: 치읓 (chieut)\nTalaffuzi: nafas bilan aytiladigan [ch].\nMisol: 차 — mashina, choy; 친구 — do‘st",
    ),
    (
        "ㅋ",
        "Nomi: 키읔 (kieuk)\nTalaffuzi: nafas bilan aytiladigan [k].\nMisol: 코 — burun, 커피 — qahva",
    ),
    (
        "ㅌ",
        "Nomi: 티읕 (tieut)\nTalaffuzi: nafas bilan aytiladigan [t].\nMisol: 토끼 — quyon, 기타 — gitara",
    ),
    (
        "ㅍ",
        "Nomi: 피읖 (pieup)\nTalaffuzi: nafas bilan aytiladigan [p].\nMisol: 포도 — uzum, 피자 — pitsa",
    ),
    (
        "ㅎ",
        "Nomi: 히읗 (hieut)\nTalaffuzi: [h].\nMisol: 하나 — bir, 학교 — maktab",
    ),
    // Tense consonants
    (
        "ㄲ",
        "Nomi: 쌍기역 (ssanggiyeok)\nTalaffuzi: taranglashgan [kk], nafassiz.\nMisol: 꽃 — gul, 까치 — zag‘cha",
    ),
    (
        "ㄸ",
        "Nomi: 쌍디귿 (ssangdigeut)\nTalaffuzi: taranglashgan [tt].\nMisol: 딸 — qiz farzand, 떡 — guruch noni",
    ),
    (
        "ㅃ",
        "Nomi: 쌍비읍 (ssangbieup)\nTalaffuzi: taranglashgan [pp].\nMisol: 빵 — non, 아빠 — dada",
    ),
    (
        "ㅆ",
        "Nomi: 쌍시옷 (ssangsiot)\nTalaffuzi: taranglashgan [ss].\nMisol: 쌀 — guruch, 비싸요 — qimmat",
    ),
    (
        "ㅉ",
        "Nomi: 쌍지읒 (ssangjieut)\nTalaffuzi: taranglashgan [jj].\nMisol: 짜요 — sho‘r, 찌개 — sho‘rva",
    ),
    // Basic vowels
    (
        "ㅏ",
        "Talaffuzi: [a].\nYozilishi: undoshning o‘ng tomoniga.\nMisol: 아 — a, 가 — ga",
    ),
    (
        "ㅑ",
        "Talaffuzi: [ya].\nMisol: 야구 — beysbol, 약 — dori",
    ),
    (
        "ㅓ",
        "Talaffuzi: [o] — og‘iz keng ochilgan, lablar yumaloqlanmaydi.\nMisol: 어머니 — ona, 거기 — u yerda",
    ),
    (
        "ㅕ",
        "Talaffuzi: [yo] — ㅓ ning yotlashgan shakli.\nMisol: 여자 — ayol, 여기 — bu yerda",
    ),
    (
        "ㅗ",
        "Talaffuzi: [o] — lablar yumaloqlanadi.\nYozilishi: undoshning ostiga.\nMisol: 오이 — bodring, 고 — go",
    ),
    (
        "ㅛ",
        "Talaffuzi: [yo] — lablar yumaloqlanadi.\nMisol: 요리 — taom tayyorlash, 교실 — sinfxona",
    ),
    (
        "ㅜ",
        "Talaffuzi: [u].\nMisol: 우유 — sut, 구두 — tufli",
    ),
    (
        "ㅠ",
        "Talaffuzi: [yu].\nMisol: 유리 — shisha, 휴지 — salfetka",
    ),
    (
        "ㅡ",
        "Talaffuzi: [ı] — lablar cho‘zilgan holda, o‘zbek tilida aniq mosi yo‘q.\nMisol: 으 — eu, 그 — u",
    ),
    (
        "ㅣ",
        "Talaffuzi: [i].\nMisol: 이 — tish, 기차 — poyezd",
    ),
    // Compound vowels
    (
        "ㅐ",
        "Talaffuzi: [e] — og‘iz kengroq ochiladi.\nMisol: 개 — it, 배 — nok, qorin",
    ),
    (
        "ㅒ",
        "Talaffuzi: [ye].\nMisol: 얘기 — suhbat, 얘 — bu bola",
    ),
    (
        "ㅔ",
        "Talaffuzi: [e].\nHozirgi tilda ㅐ bilan deyarli farqlanmaydi.\nMisol: 게 — qisqichbaqa, 네 — ha",
    ),
    (
        "ㅖ",
        "Talaffuzi: [ye].\nMisol: 예 — ha, 시계 — soat",
    ),
    (
        "ㅘ",
        "Talaffuzi: [wa] (ㅗ + ㅏ).\nMisol: 과일 — meva, 사과 — olma",
    ),
    (
        "ㅙ",
        "Talaffuzi: [we] (ㅗ + ㅐ).\nMisol: 왜 — nega, 돼지 — cho‘chqa",
    ),
    (
        "ㅚ",
        "Talaffuzi: [we] (ㅗ + ㅣ).\nMisol: 회사 — kompaniya, 외국 — chet el",
    ),
    (
        "ㅝ",
        "Talaffuzi: [wo] (ㅜ + ㅓ).\nMisol: 뭐 — nima, 원 — von (pul birligi)",
    ),
    (
        "ㅞ",
        "Talaffuzi: [we] (ㅜ + ㅔ).\nMisol: 웨이터 — ofitsiant, 궤도 — orbita",
    ),
    (
        "ㅟ",
        "Talaffuzi: [wi] (ㅜ + ㅣ).\nMisol: 귀 — quloq, 쉬다 — dam olmoq",
    ),
    (
        "ㅢ",
        "Talaffuzi: [ıi] (ㅡ + ㅣ); so‘z o‘rtasida [i], egalik qo‘shimchasi sifatida [e].\nMisol: 의사 — shifokor, 의자 — stul",
    ),
];
