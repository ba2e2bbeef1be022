//! Poseidon2 over the field of order 2^61 - 1 with `x^17` and 4 + 12 + 4
//! rounds, in widths 8 and 12.

use crate::{
    constants::Poseidon2Params,
    env::{Native, SBox},
    jive::Jive,
    poseidon2::Poseidon2,
    sponge::Sponge,
};
use ark_ff::MontFp;
use kestrel_curves::fields::PervushinField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PervushinParams;

pub type Poseidon2Pervushin8 = Poseidon2<PervushinField, PervushinParams, 8>;
pub type Poseidon2Pervushin12 = Poseidon2<PervushinField, PervushinParams, 12>;

/// Rate 8, capacity 4
pub type Poseidon2PervushinSponge<E = Native> =
    Sponge<PervushinField, Poseidon2Pervushin12, E, 8, 4, 12>;

/// Compresses two hashes of 4 elements with the width 8 permutation
pub type JivePervushin = Jive<PervushinField, Poseidon2Pervushin8, 4, 8>;

impl Poseidon2Params<PervushinField, 12> for PervushinParams {
    const SBOX: SBox = SBox::Seventeenth;

    const RCB: &'static [[PervushinField; 12]] = &[
        [
            MontFp!("2011534898346262878"),
            MontFp!("1012018927410514223"),
            MontFp!("483526554012456455"),
            MontFp!("585403953843860621"),
            MontFp!("1090389099926052991"),
            MontFp!("1516698821841809700"),
            MontFp!("211174922535495854"),
            MontFp!("1075218680271752374"),
            MontFp!("1251514604818417107"),
            MontFp!("889355992331650505"),
            MontFp!("1211618478535055679"),
            MontFp!("573185341715387420"),
        ],
        [
            MontFp!("1739138908987809197"),
            MontFp!("1924342120822266572"),
            MontFp!("463063749266984038"),
            MontFp!("1492728239145387574"),
            MontFp!("2111598353702699123"),
            MontFp!("397934827090685568"),
            MontFp!("102485796455687072"),
            MontFp!("1330069272985409767"),
            MontFp!("629647687814607803"),
            MontFp!("1755062354838933578"),
            MontFp!("263891439538666222"),
            MontFp!("433812591886795085"),
        ],
        [
            MontFp!("1016875513517856812"),
            MontFp!("1053460155132134908"),
            MontFp!("1907569713631567420"),
            MontFp!("1129052968519146800"),
            MontFp!("486874255505595757"),
            MontFp!("1904548550446043277"),
            MontFp!("1684684274608916758"),
            MontFp!("896363198331420051"),
            MontFp!("898663296857883548"),
            MontFp!("117691791913583944"),
            MontFp!("2185488365322079401"),
            MontFp!("1322316477711487142"),
        ],
        [
            MontFp!("1034157547006392471"),
            MontFp!("813276312697675211"),
            MontFp!("112748708888918734"),
            MontFp!("1862630255939473082"),
            MontFp!("1537107843081325025"),
            MontFp!("1084703274598125463"),
            MontFp!("123500198318562801"),
            MontFp!("422608940814564198"),
            MontFp!("1135342305426424207"),
            MontFp!("2270823533788752434"),
            MontFp!("445396766923910629"),
            MontFp!("1471116655806997749"),
        ],
    ];

    const RCP: &'static [PervushinField] = &[
        MontFp!("2283799790148426533"),
        MontFp!("548608548337670391"),
        MontFp!("1560800402186919179"),
        MontFp!("567363190537459376"),
        MontFp!("1752662262098141790"),
        MontFp!("1075360415343963825"),
        MontFp!("396163426892049256"),
        MontFp!("1751523289020533041"),
        MontFp!("750728631720662499"),
        MontFp!("704781123769964694"),
        MontFp!("2219416776501977351"),
        MontFp!("126130084950129826"),
    ];

    const RCE: &'static [[PervushinField; 12]] = &[
        [
            MontFp!("942110700492599577"),
            MontFp!("758167667525432808"),
            MontFp!("1658117871650208113"),
            MontFp!("548559549292582939"),
            MontFp!("1789109761492225239"),
            MontFp!("1318498218537581530"),
            MontFp!("2132668745283148875"),
            MontFp!("506267504466452337"),
            MontFp!("943507490733898606"),
            MontFp!("260507678462091193"),
            MontFp!("1528242517513936802"),
            MontFp!("806929137949101701"),
        ],
        [
            MontFp!("1444710298067743743"),
            MontFp!("2117616302422560240"),
            MontFp!("16346884443528640"),
            MontFp!("735339223421573414"),
            MontFp!("161566334917072693"),
            MontFp!("916003029273935555"),
            MontFp!("2269120475041499179"),
            MontFp!("1084979038926577372"),
            MontFp!("156191557032219268"),
            MontFp!("187686744736238123"),
            MontFp!("1810003297969078432"),
            MontFp!("1973898999187734887"),
        ],
        [
            MontFp!("1306750214222796990"),
            MontFp!("2141055429054302452"),
            MontFp!("152411785404566728"),
            MontFp!("1043375969114553292"),
            MontFp!("94234080918989987"),
            MontFp!("1344515982894623460"),
            MontFp!("1091081406079365324"),
            MontFp!("2264941544795635338"),
            MontFp!("1742705956842189311"),
            MontFp!("1355394361881838450"),
            MontFp!("303687584495194060"),
            MontFp!("1044260359478529694"),
        ],
        [
            MontFp!("110867480090599500"),
            MontFp!("2246006456799128871"),
            MontFp!("1224777436316394353"),
            MontFp!("1555553373906649687"),
            MontFp!("636235461290190462"),
            MontFp!("427575527018425274"),
            MontFp!("950328043443907926"),
            MontFp!("2010544725959270082"),
            MontFp!("1071633359097277304"),
            MontFp!("2240209214259397713"),
            MontFp!("2114531472716466033"),
            MontFp!("1940275542277684951"),
        ],
    ];

    const M: [PervushinField; 12] = [
        MontFp!("1075810893139322791"),
        MontFp!("841901508474730008"),
        MontFp!("867688650178937994"),
        MontFp!("131089781920501624"),
        MontFp!("135754996774569313"),
        MontFp!("1589361054864726797"),
        MontFp!("1951856359485497301"),
        MontFp!("858396736476577114"),
        MontFp!("269072815369199941"),
        MontFp!("1743634020500170194"),
        MontFp!("2208972096520049430"),
        MontFp!("1791069568869049183"),
    ];
}

impl Poseidon2Params<PervushinField, 8> for PervushinParams {
    const SBOX: SBox = SBox::Seventeenth;

    const RCB: &'static [[PervushinField; 8]] = &[
        [
            MontFp!("915455617089992224"),
            MontFp!("869387303103532892"),
            MontFp!("452962632540840148"),
            MontFp!("1674967781756600531"),
            MontFp!("1271607429687819290"),
            MontFp!("522504267197095570"),
            MontFp!("2107763335327496662"),
            MontFp!("483593273404864393"),
        ],
        [
            MontFp!("14999748060559841"),
            MontFp!("1830592487750851894"),
            MontFp!("1516509455941677688"),
            MontFp!("2018966878233478382"),
            MontFp!("779665406606045105"),
            MontFp!("884027282327146693"),
            MontFp!("1762335050616157075"),
            MontFp!("1168132371152516838"),
        ],
        [
            MontFp!("104290995211001142"),
            MontFp!("551085187963734375"),
            MontFp!("122808788369873896"),
            MontFp!("2220957665900883239"),
            MontFp!("567544017404601417"),
            MontFp!("525608613996631878"),
            MontFp!("1295900882714486821"),
            MontFp!("2047273176332462584"),
        ],
        [
            MontFp!("799349969154865370"),
            MontFp!("11855351577568114"),
            MontFp!("1667446316528809551"),
            MontFp!("571855915735789975"),
            MontFp!("50403522722165966"),
            MontFp!("1688336006170709620"),
            MontFp!("767902186858753154"),
            MontFp!("1428145730053723046"),
        ],
    ];

    const RCP: &'static [PervushinField] = &[
        MontFp!("1539203227447041687"),
        MontFp!("105003587218088432"),
        MontFp!("1130986220011618517"),
        MontFp!("452986089871860829"),
        MontFp!("1304301953113203555"),
        MontFp!("341039352260116727"),
        MontFp!("717707749300650753"),
        MontFp!("819155950813313459"),
        MontFp!("981469100655545357"),
        MontFp!("1107457690849994032"),
        MontFp!("1294551528980658292"),
        MontFp!("1590881993411865951"),
    ];

    const RCE: &'static [[PervushinField; 8]] = &[
        [
            MontFp!("1139685544924315465"),
            MontFp!("221974672886683053"),
            MontFp!("975781949290487469"),
            MontFp!("1805825488705174895"),
            MontFp!("1542681934524432163"),
            MontFp!("1623887856302621041"),
            MontFp!("1447165669014990447"),
            MontFp!("181388054941711479"),
        ],
        [
            MontFp!("132841741942435632"),
            MontFp!("1021083305669420950"),
            MontFp!("1345697242080535256"),
            MontFp!("899330254884983530"),
            MontFp!("536257471002333531"),
            MontFp!("1518265213482053058"),
            MontFp!("867986201718172047"),
            MontFp!("11073911709715614"),
        ],
        [
            MontFp!("1106976584064312235"),
            MontFp!("1581742826094951612"),
            MontFp!("1856190772928399772"),
            MontFp!("803265395293829009"),
            MontFp!("1452850273458317549"),
            MontFp!("2034383170532822257"),
            MontFp!("431355082876162718"),
            MontFp!("2180274856406850405"),
        ],
        [
            MontFp!("956666609463582262"),
            MontFp!("1435220155495928917"),
            MontFp!("123124045223661902"),
            MontFp!("146918692347523494"),
            MontFp!("1855439785363745399"),
            MontFp!("1753653803276632092"),
            MontFp!("2050291201514875430"),
            MontFp!("2282689374455089664"),
        ],
    ];

    const M: [PervushinField; 8] = [
        MontFp!("2169154412039281268"),
        MontFp!("983496506056522940"),
        MontFp!("1644190749324282047"),
        MontFp!("720802836256756453"),
        MontFp!("1626251708008654179"),
        MontFp!("2084332323390897382"),
        MontFp!("1573671626400477282"),
        MontFp!("1672348156255961069"),
    ];
}
