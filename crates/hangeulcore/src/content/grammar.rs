//! Embedded grammar points of 서울대 한국어 (Seoul National University Korean), books 1A–2B.
//!
//! Every key is `<book>:<title>`; the part before the first `:` must name the
//! book the entry is listed under.

use super::BookCode;

type Entries = &'static [(&'static str, &'static str)];

pub(crate) static GRAMMAR: &[(BookCode, Entries)] = &[
    (BookCode::Book1A, GRAMMAR_1A),
    (BookCode::Book1B, GRAMMAR_1B),
    (BookCode::Book2A, GRAMMAR_2A),
    (BookCode::Book2B, GRAMMAR_2B),
];

const GRAMMAR_1A: Entries = &[
    (
        "1A: N이에요/예요",
        "📘 N이에요/예요\n\nMa’nosi: «… hisoblanadi», «…man/san/dir».\nQo‘llanishi: undosh bilan tugagan otdan keyin 이에요, unli bilan tugagan otdan keyin 예요.\n\nMisol:\n저는 학생이에요. — Men talabaman.\n제 친구는 의사예요. — Do‘stim shifokor.",
    ),
    (
        "1A: N이/가 아니에요",
        "📘 N이/가 아니에요\n\nMa’nosi: «… emas».\nQo‘llanishi: undoshdan keyin 이 아니에요, unlidan keyin 가 아니에요.\n\nMisol:\n저는 선생님이 아니에요. — Men o‘qituvchi emasman.\n이것은 커피가 아니에요. — Bu qahva emas.",
    ),
    (
        "1A: N은/는",
        "📘 N은/는\n\nMa’nosi: mavzu (topik) ko‘rsatkichi — gap nima haqida ekanini bildiradi, ba’zan qiyoslash uchun ham ishlatiladi.\nQo‘llanishi: undoshdan keyin 은, unlidan keyin 는.\n\nMisol:\n저는 우즈베크 사람이에요. — Men o‘zbekman.\n동생은 학생이에요. — Ukam talaba.",
    ),
    (
        "1A: N이/가 있어요/없어요",
        "📘 N이/가 있어요/없어요\n\nMa’nosi: «… bor» / «… yo‘q».\nQo‘llanishi: undoshdan keyin 이, unlidan keyin 가.\n\nMisol:\n시간이 있어요. — Vaqtim bor.\n돈이 없어요. — Pulim yo‘q.",
    ),
    (
        "1A: A/V-아요/어요",
        "📘 A/V-아요/어요\n\nMa’nosi: hozirgi zamon, muloyim og‘zaki uslub.\nQo‘llanishi: o‘zak unlisi ㅏ/ㅗ bo‘lsa -아요, boshqa hollarda -어요, 하다 → 해요.\n\nMisol:\n가다 → 가요. — Boraman.\n먹다 → 먹어요. — Yeyman.\n공부하다 → 공부해요. — O‘qiyman.",
    ),
    (
        "1A: N에 가요",
        "📘 N에 가요\n\nMa’nosi: «…ga boraman». 에 — yo‘nalish va joy ko‘rsatkichi.\n\nMisol:\n학교에 가요. — Maktabga boraman.\n내일 시장에 가요. — Ertaga bozorga boraman.",
    ),
    (
        "1A: N을/를",
        "📘 N을/를\n\nMa’nosi: tushum kelishigi — harakat yo‘naltirilgan ob’ekt.\nQo‘llanishi: undoshdan keyin 을, unlidan keyin 를.\n\nMisol:\n밥을 먹어요. — Ovqat yeyman.\n커피를 마셔요. — Qahva ichaman.",
    ),
    (
        "1A: A/V-았어요/었어요",
        "📘 A/V-았어요/었어요\n\nMa’nosi: o‘tgan zamon.\nQo‘llanishi: ㅏ/ㅗ dan keyin -았어요, boshqa hollarda -었어요, 하다 → 했어요.\n\nMisol:\n어제 친구를 만났어요. — Kecha do‘stim bilan uchrashdim.\n영화를 봤어요. — Kino ko‘rdim.",
    ),
];

const GRAMMAR_1B: Entries = &[
    (
        "1B: V-고 싶어요",
        "📗 V-고 싶어요\n\nMa’nosi: «…ni xohlayman».\nQo‘llanishi: fe’l o‘zagiga -고 싶어요 qo‘shiladi; uchinchi shaxs uchun -고 싶어해요.\n\nMisol:\n한국에 가고 싶어요. — Koreyaga borishni xohlayman.\n동생은 자고 싶어해요. — Ukam uxlashni xohlayapti.",
    ),
    (
        "1B: V-(으)ㄹ 거예요",
        "📗 V-(으)ㄹ 거예요\n\nMa’nosi: kelasi zamon, reja yoki taxmin.\nQo‘llanishi: unli yoki ㄹ dan keyin -ㄹ 거예요, undoshdan keyin -을 거예요.\n\nMisol:\n주말에 쉴 거예요. — Dam olish kunlari dam olaman.\n내일 비가 올 거예요. — Ertaga yomg‘ir yog‘sa kerak.",
    ),
    (
        "1B: V-(으)러 가요",
        "📗 V-(으)러 가요\n\nMa’nosi: «…gani boraman» — borishning maqsadi.\nQo‘llanishi: unli yoki ㄹ dan keyin -러, undoshdan keyin -으러; keyin 가다/오다/다니다.\n\nMisol:\n책을 사러 서점에 가요. — Kitob sotib olgani do‘konga boraman.\n밥을 먹으러 왔어요. — Ovqatlangani keldim.",
    ),
    (
        "1B: A/V-지만",
        "📗 A/V-지만\n\nMa’nosi: «…, lekin …» — qarama-qarshilik.\n\nMisol:\n한국어는 어렵지만 재미있어요. — Koreys tili qiyin, lekin qiziqarli.\n비싸지만 샀어요. — Qimmat bo‘lsa ham sotib oldim.",
    ),
    (
        "1B: V-(으)세요",
        "📗 V-(으)세요\n\nMa’nosi: hurmat bilan iltimos yoki buyruq.\nQo‘llanishi: unlidan keyin -세요, undoshdan keyin -으세요.\n\nMisol:\n여기 앉으세요. — Bu yerga o‘tiring.\n천천히 말해 주세요. — Sekinroq gapirib bering.",
    ),
    (
        "1B: V-(으)ㄹ 수 있어요/없어요",
        "📗 V-(으)ㄹ 수 있어요/없어요\n\nMa’nosi: «…a olaman» / «…a olmayman» — qobiliyat yoki imkoniyat.\n\nMisol:\n저는 한국어를 읽을 수 있어요. — Men koreyscha o‘qiy olaman.\n오늘은 만날 수 없어요. — Bugun uchrasha olmayman.",
    ),
];

const GRAMMAR_2A: Entries = &[
    (
        "2A: V-(으)ㄴ 적이 있어요",
        "📙 V-(으)ㄴ 적이 있어요\n\nMa’nosi: «…gan paytim bor» — hayotiy tajriba.\nQo‘llanishi: unlidan keyin -ㄴ 적이, undoshdan keyin -은 적이; inkori 없어요.\n\nMisol:\n부산에 가 본 적이 있어요. — Pusanga borganman.\n김치를 먹은 적이 없어요. — Kimchi yemaganman.",
    ),
    (
        "2A: A/V-(으)면",
        "📙 A/V-(으)면\n\nMa’nosi: «agar …sa» — shart.\nQo‘llanishi: unli yoki ㄹ dan keyin -면, undoshdan keyin -으면.\n\nMisol:\n시간이 있으면 전화하세요. — Vaqtingiz bo‘lsa qo‘ng‘iroq qiling.\n비가 오면 집에 있을 거예요. — Yomg‘ir yog‘sa uyda qolaman.",
    ),
    (
        "2A: V-아/어 보다",
        "📙 V-아/어 보다\n\nMa’nosi: «…b ko‘rmoq» — sinab ko‘rish.\n\nMisol:\n이 옷을 입어 보세요. — Bu kiyimni kiyib ko‘ring.\n한복을 입어 봤어요. — Xanbok kiyib ko‘rdim.",
    ),
    (
        "2A: A/V-아서/어서",
        "📙 A/V-아서/어서\n\nMa’nosi: sabab («…gani uchun») yoki ketma-ketlik («…b, keyin»).\nQo‘llanishi: sabab ma’nosida keyingi gap buyruq bo‘la olmaydi.\n\nMisol:\n배가 아파서 병원에 갔어요. — Qornim og‘rigani uchun shifoxonaga bordim.\n친구를 만나서 영화를 봤어요. — Do‘stim bilan uchrashib, kino ko‘rdik.",
    ),
    (
        "2A: V-는 동안",
        "📙 V-는 동안\n\nMa’nosi: «…gan paytda», «…yotgan vaqt davomida».\n\nMisol:\n제가 요리하는 동안 청소해 주세요. — Men ovqat qilayotganimda tozalab turing.\n방학 동안 한국어를 배웠어요. — Ta’til davomida koreys tilini o‘rgandim.",
    ),
    (
        "2A: A/V-(으)ㄹ 때",
        "📙 A/V-(으)ㄹ 때\n\nMa’nosi: «…ganda», «…gan vaqtda».\n\nMisol:\n어릴 때 시골에 살았어요. — Yoshligimda qishloqda yashaganman.\n피곤할 때 음악을 들어요. — Charchaganimda musiqa tinglayman.",
    ),
];

const GRAMMAR_2B: Entries = &[
    (
        "2B: A/V-(으)ㄴ/는데",
        "📕 A/V-(으)ㄴ/는데\n\nMa’nosi: vaziyat yoki fon bildiradi, ba’zan qarama-qarshilik.\nQo‘llanishi: sifatdan keyin -(으)ㄴ데, fe’ldan keyin -는데.\n\nMisol:\n날씨가 추운데 창문을 닫을까요? — Havo sovuq, derazani yopaylikmi?\n열심히 공부했는데 시험을 못 봤어요. — Astoydil o‘qidim, lekin imtihonni yaxshi topshirmadim.",
    ),
    (
        "2B: V-게 되다",
        "📕 V-게 되다\n\nMa’nosi: «…adigan bo‘lmoq» — holatning o‘zgarishi, tashqi sabab bilan yuz bergan natija.\n\nMisol:\n한국에서 일하게 됐어요. — Koreyada ishlaydigan bo‘ldim.\n매운 음식을 잘 먹게 되었어요. — Achchiq taomni yaxshi yeydigan bo‘ldim.",
    ),
    (
        "2B: A/V-(으)ㄹ까 봐",
        "📕 A/V-(으)ㄹ까 봐\n\nMa’nosi: «…masin deb», «…dan xavotirlanib».\n\nMisol:\n늦을까 봐 택시를 탔어요. — Kechikmay deb taksiga o‘tirdim.\n잊어버릴까 봐 메모했어요. — Unutib qo‘ymay deb yozib qo‘ydim.",
    ),
    (
        "2B: A/V-잖아요",
        "📕 A/V-잖아요\n\nMa’nosi: «…ku», «bilasiz-ku» — tinglovchi ham biladigan narsani eslatish.\n\nMisol:\n어제 말했잖아요. — Kecha aytdim-ku.\n주말이잖아요. — Axir dam olish kuni-ku.",
    ),
    (
        "2B: V-기로 하다",
        "📕 V-기로 하다\n\nMa’nosi: «…ishga qaror qilmoq», «…ishga kelishmoq».\n\nMisol:\n내년에 한국에 가기로 했어요. — Kelasi yili Koreyaga borishga qaror qildim.\n친구와 같이 공부하기로 했어요. — Do‘stim bilan birga o‘qishga kelishdik.",
    ),
    (
        "2B: A/V-더라고요",
        "📕 A/V-더라고요\n\nMa’nosi: o‘zi ko‘rgan yoki his qilgan narsani eslab aytish.\n\nMisol:\n그 식당 음식이 정말 맛있더라고요. — O‘sha oshxonaning ovqati juda mazali ekan.\n한국 사람들이 친절하더라고요. — Koreyslar mehribon ekan.",
    ),
];
