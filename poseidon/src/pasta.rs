//! Poseidon2 over the Pallas base field: width 3, `x^5`, 4 + 56 + 4 rounds.

use crate::{
    constants::Poseidon2Params,
    env::{Native, SBox},
    poseidon2::Poseidon2,
    sponge::Sponge,
};
use ark_ff::MontFp;
use kestrel_curves::pasta::Fp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PallasParams;

pub type Poseidon2Pallas = Poseidon2<Fp, PallasParams, 3>;

/// Rate 2, capacity 1
pub type Poseidon2PallasSponge<E = Native> = Sponge<Fp, Poseidon2Pallas, E, 2, 1, 3>;

impl Poseidon2Params<Fp, 3> for PallasParams {
    const SBOX: SBox = SBox::Fifth;

    const RCB: &'static [[Fp; 3]] = &[
        [
            MontFp!("24448666467656506447555018649749346340705294023832615387641453784702583464707"),
            MontFp!("19752610610343814834081989345964253902282700341539483876504601969121084774539"),
            MontFp!("9520793415506326549109545537894287560752519598132096386048093015534488804808"),
        ],
        [
            MontFp!("22814234098357034097599682726494820560934925862581927123816510593532324971186"),
            MontFp!("3277621627834606517208177071759088097855048183641615082769528872043050020787"),
            MontFp!("19087113294497892618475669593723876605785307026981218038380435259594863105240"),
        ],
        [
            MontFp!("17645770319151120318035258350885823104235488352935695302274836429012504407725"),
            MontFp!("17990728141399065004015538797609951295983853332644474801890158217822768128628"),
            MontFp!("12607949331462269429981198199999740921418125994747028428126661151190418292729"),
        ],
        [
            MontFp!("10025233623562179533044093426455032352895184661359005809314430689113735312874"),
            MontFp!("20398677688057466110325934731430812468657996794663167456321709689030080949228"),
            MontFp!("1944662263588038198375346521900053780907777056656211622999059135594196413076"),
        ],
    ];

    const RCP: &'static [Fp] = &[
        MontFp!("12995068374816903282074967132431954020410301768622808407703775963080983755183"),
        MontFp!("13278128079226679628648689279705910775020794457648431336050464485837924986341"),
        MontFp!("21081768833381902942114733002158882075348844281359283013642620389621494952015"),
        MontFp!("20751788049060260683191405008569080723662271828149227137187075968560831545739"),
        MontFp!("20820291785607398388900832350860967875629907105847554413318238165275470374689"),
        MontFp!("6971878585215744613467847324629115462668098071102846520957717612260531709386"),
        MontFp!("21120353743307986506720883740380468652053382764895882204680310593048134053982"),
        MontFp!("7853308243263055176258751393326645428041138029306706980470113526802326214700"),
        MontFp!("17545076036297840030021082424260289805456380863517895917265467158332801090765"),
        MontFp!("10740853637774754893036062076749871837371049036966225040269105665447180116170"),
        MontFp!("24290796201833228559129233924595614281891670608675107544294264860003803501509"),
        MontFp!("26722678647461522072509896114724736555938247563993442152746954157222882824350"),
        MontFp!("20252491387019425681551488261397157776479297799360691728406809731508542196845"),
        MontFp!("17070806525931584028449131949070191143344166668070820337429561524629464200550"),
        MontFp!("25856554324149146992239414502939942208580094928192925471532421030223074525051"),
        MontFp!("17714998974036855356530338446243137421735047395517260588250413348153258772076"),
        MontFp!("20515196301761603016197694845695272699608637099106794944737311528118558777570"),
        MontFp!("10100400556460905874275078234698187530913105549037797180493988678937053918124"),
        MontFp!("12242010394227909997626655999345208835040087302065045201635069094289920778463"),
        MontFp!("6838505804652359252670794375725267665530548946030641535297433541475260948424"),
        MontFp!("21345718918993308853491352363460625447157796362108157527364130872100101143328"),
        MontFp!("26397988737034501095129796920971941795766209722106383463197090306632188634870"),
        MontFp!("27893799443241349360688137159923920340185830261519093384488134540544971987330"),
        MontFp!("3102550735908358465878301372253437950829524988677083749179431098369388780259"),
        MontFp!("2963742902601529003553690631564645593518709846059084207036841793643477514707"),
        MontFp!("24620569969402072776192280888011017497854992833864712509770555543278833718751"),
        MontFp!("25964807298150242099204032696543021731332498792173212422070959505270506288817"),
        MontFp!("15107529391758643095716794813038523751713309080738989300826699946985294497278"),
        MontFp!("26149402682269665088314773514719203730233986608723938665192802061570851149320"),
        MontFp!("14300403008645647974330112479193012555289445502185868105642182233848475582899"),
        MontFp!("1115361296285111421659408034287929280905078990986385263729179376131648187058"),
        MontFp!("13081790983218231663826423630402269594642175266089309953018053418396572757728"),
        MontFp!("8235521536407760690987948268259353704300918036393867110229857008864492272243"),
        MontFp!("10466479494603471110085160358255184712338985686117376680963274257033378093044"),
        MontFp!("10505351732961945434077967966272614185370876266035423475161721043839572600354"),
        MontFp!("20492577817846125120765219135044390230365666103475157006227551523345028416653"),
        MontFp!("9609702284002210167411637400029381999579573316818014884056109946803635903949"),
        MontFp!("5550990570115355104018261990072269149174220738166262960442108003631983239538"),
        MontFp!("4918607047827293284267178559571975167840449247468221935183514469924645319431"),
        MontFp!("22327941647779098096798004328483144118875590152725522668881024275272944414051"),
        MontFp!("12446460574596706595202266827006842340757403121130616325345603812748836460769"),
        MontFp!("27189681619715898792962291676467917480208426216006102231934586868572227499788"),
        MontFp!("8764133057432414528430129363242868018774698311348571048821261111352103735418"),
        MontFp!("10306763858151643521688107379000096066251452823515924808024537509180120590301"),
        MontFp!("18225419295569955709959264540894574108104760504259646575014370705413341659332"),
        MontFp!("5586023775523332359482150390241085503538343981397337410273960103664896061318"),
        MontFp!("1695250059692506203013076949309928562723368039356271828712091742435374824213"),
        MontFp!("22405375952478438071934186194392756316305143676541092887399118393981076553314"),
        MontFp!("10458537515857632902862111990551662021418451863412906712791662010765438376282"),
        MontFp!("8572903186653093823393996934308987796939174550688349948095623496677370491349"),
        MontFp!("26376584034857786080333290889331925169513316008268823389497001028535947725689"),
        MontFp!("7665731866090251989409614325607843738907805016631894070026948889862506085680"),
        MontFp!("4477111727391714901720242825845081209726923645743756019648580408082893195544"),
        MontFp!("24052818921338006126265655523211029781246213697245853990174101542814404796394"),
        MontFp!("2514052438055955996166191181555087722391472372457485613396039637466284876008"),
        MontFp!("15915052994762066788134349126706966018769870301280961502696575741203715471620"),
    ];

    const RCE: &'static [[Fp; 3]] = &[
        [
            MontFp!("14523364456910312064741833824384915970721514893070438053344001112980722532883"),
            MontFp!("8803956670977498145356652907229121212730957151393430875717273509992687004092"),
            MontFp!("10663098851045790689902302726099843869982323815663085170094254490745070606259"),
        ],
        [
            MontFp!("15771722055033274898971962892589697054998768026073330065443825965063277326619"),
            MontFp!("24009394270524302139600659893428847877911428012188014930479974124593827497896"),
            MontFp!("22073551841352628264163147373911841152201793863183403625155779300264423096775"),
        ],
        [
            MontFp!("16843535002948632653135556540328830165745557071105115915108598045919908377862"),
            MontFp!("1518205506066737062294516413663386248913537376120439498858484657705789460110"),
            MontFp!("16130557973030629467749350011718803160555727145300402111387384840879624701824"),
        ],
        [
            MontFp!("8889838242573900603893251082243963471048473250580324046918980785903088175746"),
            MontFp!("26228644761030089864593236267771722990412818339075926138914275040572783608441"),
            MontFp!("12067734632794838098229971919863170976260163840996333398973186642649256640429"),
        ],
    ];

    const M: [Fp; 3] = [MontFp!("1"), MontFp!("1"), MontFp!("2")];
}
