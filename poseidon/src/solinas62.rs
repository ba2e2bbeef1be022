//! Poseidon2 over the field of order 2^62 - 2^8 - 2^5 + 1 with `x^3` and
//! 4 + 41 + 4 rounds, in width 12.

use crate::{
    constants::Poseidon2Params,
    env::{Native, SBox},
    poseidon2::Poseidon2,
    sponge::Sponge,
};
use ark_ff::MontFp;
use kestrel_curves::fields::Solinas62Field;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solinas62Params;

pub type Poseidon2Solinas62 = Poseidon2<Solinas62Field, Solinas62Params, 12>;

/// Rate 8, capacity 4
pub type Poseidon2Solinas62Sponge<E = Native> =
    Sponge<Solinas62Field, Poseidon2Solinas62, E, 8, 4, 12>;

impl Poseidon2Params<Solinas62Field, 12> for Solinas62Params {
    const SBOX: SBox = SBox::Cube;

    const RCB: &'static [[Solinas62Field; 12]] = &[
        [
            MontFp!("216820512640598552"),
            MontFp!("2241240026723100927"),
            MontFp!("1211035622153972142"),
            MontFp!("4199846088540492839"),
            MontFp!("1991691809195515247"),
            MontFp!("4097410792422816960"),
            MontFp!("4137159926184568439"),
            MontFp!("3922631941324133789"),
            MontFp!("998486067071206355"),
            MontFp!("1572354697157144662"),
            MontFp!("1362429057080894793"),
            MontFp!("2090822334619367353"),
        ],
        [
            MontFp!("759276745644300708"),
            MontFp!("2142469674344658545"),
            MontFp!("3967069609859097874"),
            MontFp!("1118734175748608934"),
            MontFp!("1136487295147373144"),
            MontFp!("3471779373560593162"),
            MontFp!("339912115558373957"),
            MontFp!("2781460048395041160"),
            MontFp!("4289646642183961879"),
            MontFp!("3733271281268599880"),
            MontFp!("1078685343774315153"),
            MontFp!("579635201239826717"),
        ],
        [
            MontFp!("369772078947090636"),
            MontFp!("1284101319085318667"),
            MontFp!("1690955807196822669"),
            MontFp!("901448562034940019"),
            MontFp!("824124828143828226"),
            MontFp!("2867957037207471634"),
            MontFp!("285530774077979974"),
            MontFp!("1699650960629865257"),
            MontFp!("1723752927457525453"),
            MontFp!("1784240029632919911"),
            MontFp!("3724144635263778394"),
            MontFp!("949419090792460733"),
        ],
        [
            MontFp!("2087484482639615334"),
            MontFp!("198328720845841202"),
            MontFp!("2188185904580288777"),
            MontFp!("58425521165502993"),
            MontFp!("1329639779788030676"),
            MontFp!("1314017476096420391"),
            MontFp!("2496136626214013894"),
            MontFp!("4119963522911414797"),
            MontFp!("4229270118796706393"),
            MontFp!("3446802500559447515"),
            MontFp!("699419065306151394"),
            MontFp!("2069556846713567887"),
        ],
    ];

    const RCP: &'static [Solinas62Field] = &[
        MontFp!("2170882576246664310"),
        MontFp!("589820238150185104"),
        MontFp!("415271102753228867"),
        MontFp!("1676754981978377777"),
        MontFp!("2261445289807903996"),
        MontFp!("1869198467136544097"),
        MontFp!("3986689045151291838"),
        MontFp!("1454156807813037723"),
        MontFp!("2785266583632890023"),
        MontFp!("3553541804930647942"),
        MontFp!("2081455664379544134"),
        MontFp!("4310520410992020726"),
        MontFp!("713955166430912729"),
        MontFp!("2515956704371482514"),
        MontFp!("1511796088193819817"),
        MontFp!("3456303137193970638"),
        MontFp!("1665911991432308820"),
        MontFp!("786824710638111314"),
        MontFp!("184161588985384566"),
        MontFp!("2602762805379327416"),
        MontFp!("283237799975428405"),
        MontFp!("3369981035028911367"),
        MontFp!("4303745546760801223"),
        MontFp!("3351908659995899640"),
        MontFp!("3607672272683396951"),
        MontFp!("3991244109762436105"),
        MontFp!("3364091596183185174"),
        MontFp!("1227669388656588252"),
        MontFp!("3825934419076457"),
        MontFp!("1275870704178834844"),
        MontFp!("3734614691721523753"),
        MontFp!("2354726782787368865"),
        MontFp!("2494302124736516700"),
        MontFp!("104708447494368968"),
        MontFp!("193427307533180643"),
        MontFp!("3456577890147932611"),
        MontFp!("4420903024013824381"),
        MontFp!("2864401030669109737"),
        MontFp!("2296560642966169761"),
        MontFp!("1609453979422466062"),
        MontFp!("3721136373313801345"),
    ];

    const RCE: &'static [[Solinas62Field; 12]] = &[
        [
            MontFp!("2014553148230352857"),
            MontFp!("841779409402689826"),
            MontFp!("353231372865310022"),
            MontFp!("3911090727174683188"),
            MontFp!("1736823272467758642"),
            MontFp!("2720090964354126855"),
            MontFp!("1030252512059242449"),
            MontFp!("3426579750271678893"),
            MontFp!("2549299737826045519"),
            MontFp!("3928722046962047433"),
            MontFp!("2184382030910323532"),
            MontFp!("2136201951162998189"),
        ],
        [
            MontFp!("3171649146422952849"),
            MontFp!("1932056228038863626"),
            MontFp!("303585674372765808"),
            MontFp!("4557489328531390531"),
            MontFp!("3335606109524353979"),
            MontFp!("1898170787838800468"),
            MontFp!("3586185645112366329"),
            MontFp!("2047113590153995021"),
            MontFp!("4345693361982822430"),
            MontFp!("1561030816317218186"),
            MontFp!("742243501734166799"),
            MontFp!("3822365176224904084"),
        ],
        [
            MontFp!("498354023764395006"),
            MontFp!("1827885135624043948"),
            MontFp!("1049132471794756874"),
            MontFp!("1654731630566159557"),
            MontFp!("3135165443263275673"),
            MontFp!("3161092617851506516"),
            MontFp!("104809020949810093"),
            MontFp!("1426810666672134968"),
            MontFp!("2512924211737767238"),
            MontFp!("4526942944748726053"),
            MontFp!("3443917870621574961"),
            MontFp!("3729579583298691031"),
        ],
        [
            MontFp!("3236583641400594226"),
            MontFp!("3952663351716203829"),
            MontFp!("1417115654565512840"),
            MontFp!("4519769473661412635"),
            MontFp!("3635042612739212017"),
            MontFp!("4076715082016183789"),
            MontFp!("4533552894106359727"),
            MontFp!("3613807594487077253"),
            MontFp!("1179713468071507677"),
            MontFp!("3811500488571805762"),
            MontFp!("2380102515731060243"),
            MontFp!("1683029897010822484"),
        ],
    ];

    const M: [Solinas62Field; 12] = [
        MontFp!("4424560393869495371"),
        MontFp!("2974382622698167720"),
        MontFp!("4340608575841398068"),
        MontFp!("532454574426847298"),
        MontFp!("2023483543238692127"),
        MontFp!("581285939513585287"),
        MontFp!("2082757627740607166"),
        MontFp!("2825136290986768631"),
        MontFp!("801305556817314470"),
        MontFp!("2063423052871538577"),
        MontFp!("2095819948862281506"),
        MontFp!("3329294375589976066"),
    ];
}
