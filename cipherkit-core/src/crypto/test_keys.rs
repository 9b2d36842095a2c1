//! Fixed RSA keys so tests do not pay for 2048-bit key generation.

/// Pair A public key, X.509 SubjectPublicKeyInfo DER, Base64.
pub const A_PUB: &str = concat!(
    "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAysdogir2SVILQtTbXrqeTXUmTye56G9I",
    "LSQDdl1KCO67TklkWd2bZAY6XCD2xtghQA+GxsjmMOV3ykx6MhtJH59FhaU7ibxzJ4qx8Zc5x0pM",
    "sPLN7Ns2yYJFasHSlvzBA3EnEV/Sm7lyr7USI5XLfGNYj8UaeSTEpnJZtcdcpzK8BJnP7Ai9ETZA",
    "lDjO4RKIjITPyDU+PRw8Kskfkme2i4C5PCsMtp28VemScB58jLReNTcWVXEJOlKIZwxFYVtqm+Fv",
    "qV6eqk5xj7/29fQEZn8+izqwBSWxkNnoXYvU3Uj9MgDxQHTqRCLtRyst7D0gCAgx5VTBiZn8XGe2",
    "9PdEyQIDAQAB",
);

/// Pair A private key, PKCS#8 DER, Base64.
pub const A_PRIV: &str = concat!(
    "MIIEvgIBADANBgkqhkiG9w0BAQEFAASCBKgwggSkAgEAAoIBAQDKx2iCKvZJUgtC1Nteup5NdSZP",
    "J7nob0gtJAN2XUoI7rtOSWRZ3ZtkBjpcIPbG2CFAD4bGyOYw5XfKTHoyG0kfn0WFpTuJvHMnirHx",
    "lznHSkyw8s3s2zbJgkVqwdKW/MEDcScRX9KbuXKvtRIjlct8Y1iPxRp5JMSmclm1x1ynMrwEmc/s",
    "CL0RNkCUOM7hEoiMhM/INT49HDwqyR+SZ7aLgLk8Kwy2nbxV6ZJwHnyMtF41NxZVcQk6UohnDEVh",
    "W2qb4W+pXp6qTnGPv/b19ARmfz6LOrAFJbGQ2ehdi9TdSP0yAPFAdOpEIu1HKy3sPSAICDHlVMGJ",
    "mfxcZ7b090TJAgMBAAECggEACbtuEkBAW4bA5Ftdr3NWtWo71VT3ZNbRcJwvv9qsmtblXbWjR7Zd",
    "dryfSKxq16KIHwBXxDrgZGSg/hAzVawOU4KUBjzmyX6mSrWrAmizBNP1sBDpLfbb72otjXkBs84r",
    "78+6k6iFDcUF4nW26gcOkfjdJ2JK+dk4SHJIyLMJqPsOAmWSc/+cEI4UHp1xET9x7UaBf3fPPPCZ",
    "aP1pTGKnq2W1stvNOvNeQCu05dEkRiOBI0jMnJbyXQWwio0GungcWIJbIfPmYHcB7fgbwLpTdlj2",
    "4DXOwmrfjtgQK0f2brYtR2o8cg4e3Q0SXj9JQNHxq49i++f2GNluySgpcUmGcQKBgQD88oY9Xlw4",
    "Rr3kE9pSKEyleGTlG5jLDwEw19XJyQ2J2cHilSsMNLwY9iZriDsC46OkbmZJv0zcu2Y3cRp0fbva",
    "EUuU3gvOILmzf3/uK0u5bghVIXBy/caKeBZ/UWs+45pk9BB8mUxCqQ0BRFLa/99wyWAD6aPXf3o1",
    "aurpcLaQWQKBgQDNOeO6Tm3lB9N5AKI6nkJont5TPcjhxJZhs43J4nbzkJ6hikzQ7Mc90T4tM46e",
    "lAOCCC0nbRDBkBokufSFEK919T1nRxLGalt2jf5a/ON3wEgDacE05u1fVuTr3OaMS9C3yw6XXLZz",
    "pSR6EhKWpqPSlnYUtVMC0VJ2JZyJW3BJ8QKBgQCt/MgXeEtorkg5lOpMLsoh24FTEjt0GRsRlLTK",
    "OpAkbPNvPnnAyJlFdjMRLkChCSHrncCgI4TkI8b4hcTTshS/t7vMZzupilsRu7ashX1ty+DRZdHq",
    "VuL1Jgsbgk6JkJcHr9WTTwLkq1F1uKBhYTU5aFqx9kirl1ThX2y8K7p36QKBgChftCJp3YrKMFtE",
    "uaWojs4AOyLLK+LmhuMvrLxD1jzyfZKwH46Wllfd+0pvMyaVXd9N9nwkI8DAtbP19VncP3iIR40y",
    "2Um5kMbRBnImACYF6OTrADyFFbvE34JbUevV2njd9L/oWGiF25g8R/XlUKNUQGSwi2UpgvyFR7dq",
    "CrwxAoGBAIEQKwVZiSrSkCmA8RXcMDSX5iQGw6OCJFBW1BccIG2AevjDrLEMuGoxVaKkfYI1faee",
    "UWC2k5EJWvAmT2e3XXtqSKAnh+xouF0lT7BSwf90Ehv3Y7LX3fhR3YGbs2H2rhBtJfhjAEGA9Lbd",
    "wHwUN6xLa/gMHitJBAAhRtQowjLC",
);

pub const B_PUB: &str = concat!(
    "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA5fL8w0oUVZ4zRzh8VXDIgPzfcajrlK1U",
    "JOA05DaWH/6W10PtE5DBoI+npZsJ9eDsm8YxWgZefA1Yx9hJWcfdxM5qe1+fjBwP2ARDGSxYeoW+",
    "Dww3pfPtZakEFchNW/7VmisUQj6yF82CS4CJtERtmKpK508+IsUYs918KH/PVL74zp1UK7/ktBmT",
    "vsTpZm69KuCCtTOM2Qfd0dlui6QeEECyU0/xB4WDPDdloxiF4rMcZBVqmvqzZ/ppo98kWDishTIA",
    "Ot3WhKMEjxJfD+j1a9PH+TxBNom1U4YTW9uRTKu4PoyY0HI8jc4fLAmx2r/GpVyoVfPPwZ0aE6+m",
    "qu0ckwIDAQAB",
);

pub const B_PRIV: &str = concat!(
    "MIIEvAIBADANBgkqhkiG9w0BAQEFAASCBKYwggSiAgEAAoIBAQDl8vzDShRVnjNHOHxVcMiA/N9x",
    "qOuUrVQk4DTkNpYf/pbXQ+0TkMGgj6elmwn14OybxjFaBl58DVjH2ElZx93Ezmp7X5+MHA/YBEMZ",
    "LFh6hb4PDDel8+1lqQQVyE1b/tWaKxRCPrIXzYJLgIm0RG2YqkrnTz4ixRiz3Xwof89UvvjOnVQr",
    "v+S0GZO+xOlmbr0q4IK1M4zZB93R2W6LpB4QQLJTT/EHhYM8N2WjGIXisxxkFWqa+rNn+mmj3yRY",
    "OKyFMgA63daEowSPEl8P6PVr08f5PEE2ibVThhNb25FMq7g+jJjQcjyNzh8sCbHav8alXKhV88/B",
    "nRoTr6aq7RyTAgMBAAECggEABfch8okF8ltVIOMIwAivKEAnJczdi7EGw/bNuHaSuh1shATJmN6C",
    "VMF/9mO0GZ0Dq7OJDTj+vit0eFQWlw3V0Ci7X3GmyHI5QP/fTmm1mTwbUaBIrfVK3SkffNcs6+w2",
    "Vgu0Y1blX4kKeR31CehVNYbZbvBsgBIVPCP3TW+qDRyN6ZF/CCOIZKpVgr7g4pWEKRZQlRKxbCyR",
    "bSPRxMjHyAHs+Ft/sIv5AgsfTEcUlEsJW5CXKYLir1sg6rI+CJVRFzt6cVEp7+gE1I9S3gg+VYaB",
    "uPEqolLj2qHwGCeKq5Dd0io2mBmh0dVXv1Pumb7qC2wNVvmf5TqQMNnxXp57KQKBgQD/7YB41mPz",
    "lD+7Q+LSVl+F4SrEejeHuAER6gKqr/Yhogb3AzsKDN860aAeYu/ZPebl7dKQpH06Cc/JdCzc4yb2",
    "lSt5UqPm73Z+66B/mwzPrM3tAaizgjOFqaU/2r1Km9LBiWnnhKWLQAo/o0QotRctyXO5k6AmG8yX",
    "+WFKT8cYSwKBgQDmA5uZdlmg1sN1fbXm9cyZv1YtvzjG7+QMkhm73LN/SSc9VzA5aUWBjnusBkGw",
    "7dVgAUX6sn/A2pfmp+4yp3vQTj++X8P/oiE+WuulyI/m8Q/05ga0p3vtojr13xSqdGMBpP5wza9x",
    "dz+uv3P19blKyUY/sDAll3264b7hlENv2QKBgFhjRB13namAJ8qbFXkjT3ZDX6vfsdHzoJr5QNaG",
    "UvEmrlUdDoTYETiVMUGNVdynXllGm5RM2tryjIq8zsmywcAjoJIUEnstdLU81396oyAOREh4bDUi",
    "4HxnLKUy/HEKA+3HcYX979Z51ZBI6L9OW6T6kDclXwgKTcym2gz6JH6lAoGAI6Mndo15sYvU2N1T",
    "U6d9vcyBY7Ee8OO2J6RzTEITpYMGC2D43cxLspkK3EpT3z/aMXfBCeiiFpVHt7sJEtwUOOAGzE42",
    "JeNO10RrAlKiyRtMZ5tEKrVQZC8gh3u6zfYeaODRc1TK+/+H5GFRbChYPxgUREXeD9T66/uSAY1h",
    "LXECgYA3AzYWN0qGoeZH7qiyGRzHjilQiBX/qqpHt40TyuA6zZO1k4N6mSehAuYI1+MW/a4Ceqwz",
    "JmBL62kMRoDhhmPZYLwL7WTE/A3QDDismmAgAjbIxuQDYQzbizJ8GPp97eaqdC7pY8Vws+vSWqe4",
    "r0ETBNgEFFH3VNgGQ6WUDsZpZg==",
);

/// 1024-bit pair, below the accepted modulus size.
pub const SMALL_PUB: &str = concat!(
    "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDNu+Y/MwYiyDbdCTMGm9eFqUX11XRx/+5XiWJy",
    "2j12R4ckRbxOl4pl9eOFDohdaKcp+c1/iIiDoyCzGJYtdio4BCX/GD0RN5hQ/LQBspMHTZGRNPjn",
    "KFOSaQssNJeSFkD5yAwRVi0HsW8WPDD1QLNRkgQQ2nZwiIrcQG3gPUcQdQIDAQAB",
);

pub const SMALL_PRIV: &str = concat!(
    "MIICdwIBADANBgkqhkiG9w0BAQEFAASCAmEwggJdAgEAAoGBAM275j8zBiLINt0JMwab14WpRfXV",
    "dHH/7leJYnLaPXZHhyRFvE6XimX144UOiF1opyn5zX+IiIOjILMYli12KjgEJf8YPRE3mFD8tAGy",
    "kwdNkZE0+OcoU5JpCyw0l5IWQPnIDBFWLQexbxY8MPVAs1GSBBDadnCIitxAbeA9RxB1AgMBAAEC",
    "gYEAktOq+ye7FU+2eAF8vRaztdyc5Vm1hTaWLzsJW9aNTsC1nhl2ztAwIZxfCDLa928c/kQdeQtE",
    "Ak6Fo8vEQiW28oKNX+WKw07mObBNy5qB1Zc6oB6ipWa78U9l8pX3jABcw5W0nk716b3rcR8UKSaa",
    "+7ufIQR9gfWfFl/CuiXF0PECQQD6jAbBzSoRyc8AS27otmTJongXVc85jKH4gQOJ4J9WytA97HhB",
    "/leRAgM8wbAU9TBpeyF0N63ZtR3jLw+y/RxbAkEA0jYwMZkJOgce+FE2rmCyDcu4zLQrkEcUzueL",
    "oCwW2cX20iE9ac5wyjQGcGXVNu30MmSne0Vb4ElXS9WEw6ZfbwJAAxXMU4CaPwPUJ7XGFNmCHjWA",
    "8xCcb6H6sJuuFnmMnL38mHab+HwQSfnTXmEoMOngAbyBafPxkRe42X5P3C1ftwJAfeOV2R4dOHMr",
    "SOraJHQkLb7jXTRJIo5vF7nzFGlTBfhYaF8fuE25nl6pvIY/ujWnGMbOxjQzYY6KiQ/GAqWQYQJB",
    "AJ4JWe5cY09mbrwYqcIptzDIJkt9LXweeXcGBsl+60iio3nPFQ+YowAusHu6hg5nQVe3e96JIQTV",
    "Pyizr9N+m0U=",
);

/// `interop check` encrypted under pair A by an independent OAEP(SHA-256, MGF1-SHA-256) implementation.
pub const A_CIPHERTEXT_MGF1_SHA256: &str = concat!(
    "pg53aGW/O2QlwVyDFAhv27iM0h5fyIAjq7UlNiMougdLCBpcisWNTTugPc/1vzx/ENLcV3gv2/MD",
    "M46Dmn/DUF7vQzyaq20dWXG7NyWZGSlqoqSheP/Og+tc3rRM00yXWQShnscmW7620VwISHRII+1v",
    "emKx/S9wc1doV+8xayVfthzTFg++ltql/4wafUmv91TT78SQSnZotp9N0HOSTTlIetkwlofRoarF",
    "KABu7d3j0nTnr6uX+iF5N+8GATXPTWxxQ8kz9rgvIObXs1u4Po32DalymWoW32aa/oNNuKUJXWtd",
    "zxlBr2+DZSEMntb8biCwea2M79ELHfTFUO4Vog==",
);

/// `interop check` encrypted under pair A with OAEP(SHA-256, MGF1-SHA-1), the
/// parameters a JCE `RSA/ECB/OAEPWithSHA-256AndMGF1Padding` peer uses.
pub const A_CIPHERTEXT_MGF1_SHA1: &str = concat!(
    "c3PXwxSDP93AOY+w7t09ZAlT8hM0d3COHfcFcMJ6ObDfdJSWkGRT31aS8dWJ3Faz71TJb4e/u8+I",
    "wPMIO2vF9fAYlaW9GaCAUY3ulQjoRhg/nWcoIN4/O25cxiVOsiVAmnYzMDHywpxB3jJNgKQE3+iU",
    "y16IsuVoyaOttOc5PeWJDLfwI+Enwrs7iUP6dZtmN9is2L42+qVPFxsRccpx2j9C62KJeJMzlTjp",
    "QmJSOrsFz1AGDtw59YUz98gJEcPJIdnJr5DdAcHWf3SsPwC/kmnwNdNFkF4bP4vtJT7fmyzd2S7f",
    "+J7LevXpHu/J0AWovnFgvwxwf1QE/wEpZ+pDow==",
);
