//! Built-in Groth16 key for the SP1 wrapper program, plus a known-good proof for it.
//!
//! G1 points are x || y and G2 points use the EVM layout x_im || x_re || y_im || y_re.
//! The G2 key points are stored already negated.

/// vkey hash of the program the default key belongs to; also the first public input.
pub const DEFAULT_PROGRAM_HASH_HEX: &str =
    "00a61ad8347fe889261a355403eaef5795d3d6adf039126d55da3fe9aa9f2a54";

pub const DEFAULT_VK_ALPHA_G1_HEX: &str = concat!(
    "2d4d9aa7e302d9df41749d5507949d05dbea33fbb16c643b22f599a2be6df2e2",
    "14bedd503c37ceb061d8ec60209fe345ce89830a19230301f076caff004d1926",
);

pub const DEFAULT_VK_BETA_NEG_G2_HEX: &str = concat!(
    "0967032fcbf776d1afc985f88877f182d38480a653f2decaa9794cbc3bf3060c",
    "0e187847ad4c798374d0d6732bf501847dd68bc0e071241e0213bc7fc13db7ab",
    "001752a100a72fdf1e5a5d6ea841cc20ec838bccfcf7bd559e79f1c9c759b6a0",
    "192a8cc13cd9f762871f21e43451c6ca9eeab2cb2987c4e366a185c25dac2e7f",
);

pub const DEFAULT_VK_GAMMA_NEG_G2_HEX: &str = concat!(
    "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
    "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
    "275dc4a288d1afb3cbb1ac09187524c7db36395df7be3b99e673b13a075a65ec",
    "1d9befcd05a5323e6da4d435f3b617cdb3af83285c2df711ef39c01571827f9d",
);

pub const DEFAULT_VK_DELTA_NEG_G2_HEX: &str = concat!(
    "1cc7cb8de715675f21f01ecc9b46d236e0865e0cc020024521998269845f74e6",
    "03ff41f4ba0c37fe2caf27354d28e4b8f83d3b76777a63b327d736bffb0122ed",
    "01909cd7827e0278e6b60843a4abc7b111d7f8b2725cd5902a6b20da7a2938fb",
    "192bd3274441670227b4f69a44005b8711266e474227c6439ca25ca8e1ec1fc2",
);

pub const DEFAULT_VK_IC_HEX: [&str; 3] = [
    concat!(
        "26091e1cafb0ad8a4ea0a694cd3743ebf524779233db734c451d28b58aa9758e",
        "009ff50a6b8b11c3ca6fdb2690a124f8ce25489fefa65a3e782e7ba70b66690e",
    ),
    concat!(
        "061c3fd0fd3da25d2607c227d090cca750ed36c6ec878755e537c1c48951fb4c",
        "0fa17ae9c2033379df7b5c65eff0e107055e9a273e6119a212dd09eb51707219",
    ),
    concat!(
        "04eab241388a79817fe0e0e2ead0b2ec4ffdec51a16028dee020634fd129e71c",
        "07236256d21c60d02f0bdbf95cff83e03ea9e16fca56b18d5544b0889a65c1f5",
    ),
];

/// A || B || C of a proof that verifies under the default key.
pub const SAMPLE_PROOF_HEX: &str = concat!(
    "1a78f6839bb5d88d1674dc0bb7231aef8ad32aded0418bcd3c0e8186365a448f",
    "1d1160f7903c238c2ac8a24938448337620e9e20c1511edb61e14766a8aa3569",
    "0c2a02ff3f98b4c1c406228fdf45158795144f978887dd1133680719851e5eda",
    "30363c09c5fcc01c3f5d300534b47a7a4f0390bd7e1a8cbec942f81c5ae9af5d",
    "2fcee692ab4e54d1f8157320419655b49a0ed035ae613fb66983486379a4b7c8",
    "1dc3f46b40c711f5c6a74083b54ac7a6ad6b469342b4080de759da9b83e78d72",
    "223d4000ce77907532337b2cf2f06c16acd4bfae8690c6b8cbfde4d40a3c2715",
    "019eba6ef839006a33148941acac52e2e13b2220a3e698f1771868282699cc34",
);

/// Public-values hash (already masked below r) that goes with `SAMPLE_PROOF_HEX`.
pub const SAMPLE_PUBLIC_HASH_HEX: &str =
    "1ddc001001f1d8cdecd432c67ab65e899ed1b97a5753f3b2116699f736161ffb";

/// IC0 + program_hash * IC1 + public_hash * IC2 for the sample.
pub const SAMPLE_LINEAR_COMBINATION_HEX: &str = concat!(
    "089f81c788b51670ac0b2c9124928d8d3bf27090e8286e6fc33e590ad0bea7f1",
    "22854128324f79c69feee580970d1634b05341d69e5240f6867909886c032826",
);
