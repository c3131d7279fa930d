//! Pre-computed filter coefficient tables.
//!
//! The FIR kernel is an 81-tap Hamming-windowed-sinc low-pass (cutoff chosen
//! below the decimated Nyquist so the 10x decimation in `fir` does not alias).
//! Each channel's IIR coefficients are five identical RBJ bandpass biquads,
//! centered on that channel's carrier frequency, cascaded and multiplied out
//! into the direct-form 11-B/10-A representation the filter bank consumes.
//! Computed offline; not recomputed at runtime.

pub const FIR_COEFFICIENTS: [f64; 81] = [
    -3.7376988254626825e-04, -2.4434664013035437e-04, -8.9832480688920108e-05, 9.9849514897878362e-05, 3.3329676391940252e-04, 6.1413283103297495e-04,
    9.3768636410662036e-04, 1.2883657079921201e-03, 1.6382159306501283e-03, 1.9470489989747775e-03, 2.1643884074918343e-03, 2.2332796950723078e-03,
    2.0958059842142718e-03, 1.6999342864247933e-03, 1.0071264581543854e-03, -1.1337487611582933e-18, -1.3107632351507376e-03, -2.8810747702748985e-03,
    -4.6304093590558626e-03, -6.4416843241055233e-03, -8.1644270480673957e-03, -9.6213369369523172e-03, -1.0618044902797424e-02, -1.0955566059903474e-02,
    -1.0444658425271878e-02, -8.9210695232011979e-03, -6.2604978677407398e-03, -2.3920352900475149e-03, 2.6911009370251910e-03, 8.9245892557637194e-03,
    1.6170576855439860e-02, 2.4220279605165488e-02, 3.2801706325052457e-02, 4.1592203838897897e-02, 5.0235128393438584e-02, 5.8359601825009322e-02,
    6.5602037799165180e-02, 7.1627949240344879e-02, 7.6152489318695185e-02, 7.8958242007846999e-02, 7.9908960802316673e-02, 7.8958242007846999e-02,
    7.6152489318695185e-02, 7.1627949240344879e-02, 6.5602037799165194e-02, 5.8359601825009329e-02, 5.0235128393438591e-02, 4.1592203838897890e-02,
    3.2801706325052471e-02, 2.4220279605165491e-02, 1.6170576855439860e-02, 8.9245892557637211e-03, 2.6911009370251915e-03, -2.3920352900475145e-03,
    -6.2604978677407407e-03, -8.9210695232011961e-03, -1.0444658425271881e-02, -1.0955566059903478e-02, -1.0618044902797425e-02, -9.6213369369523224e-03,
    -8.1644270480673974e-03, -6.4416843241055215e-03, -4.6304093590558643e-03, -2.8810747702748981e-03, -1.3107632351507380e-03, -1.1337487611582943e-18,
    1.0071264581543856e-03, 1.6999342864247946e-03, 2.0958059842142718e-03, 2.2332796950723073e-03, 2.1643884074918347e-03, 1.9470489989747771e-03,
    1.6382159306501289e-03, 1.2883657079921216e-03, 9.3768636410662069e-04, 6.1413283103297549e-04, 3.3329676391940252e-04, 9.9849514897878362e-05,
    -8.9832480688920176e-05, -2.4434664013035437e-04, -3.7376988254626825e-04,
];

pub const IIR_B_COEFFICIENTS: [[f64; 11]; 10] = [
    [
        1.3787995017348637e-07, 0.0000000000000000e+00, -6.8939975086743189e-07, 0.0000000000000000e+00, 1.3787995017348636e-06, 0.0000000000000000e+00,
        -1.3787995017348636e-06, 0.0000000000000000e+00, 6.8939975086743189e-07, 0.0000000000000000e+00, -1.3787995017348637e-07,
    ],
    [
        2.2420666766688722e-07, 0.0000000000000000e+00, -1.1210333383344361e-06, 0.0000000000000000e+00, 2.2420666766688722e-06, 0.0000000000000000e+00,
        -2.2420666766688722e-06, 0.0000000000000000e+00, 1.1210333383344361e-06, 0.0000000000000000e+00, -2.2420666766688722e-07,
    ],
    [
        3.1832041609358240e-07, 0.0000000000000000e+00, -1.5916020804679121e-06, 0.0000000000000000e+00, 3.1832041609358242e-06, 0.0000000000000000e+00,
        -3.1832041609358242e-06, 0.0000000000000000e+00, 1.5916020804679121e-06, 0.0000000000000000e+00, -3.1832041609358240e-07,
    ],
    [
        3.8475110991490067e-07, 0.0000000000000000e+00, -1.9237555495745032e-06, 0.0000000000000000e+00, 3.8475110991490064e-06, 0.0000000000000000e+00,
        -3.8475110991490064e-06, 0.0000000000000000e+00, 1.9237555495745032e-06, 0.0000000000000000e+00, -3.8475110991490067e-07,
    ],
    [
        3.9736810740988182e-07, 0.0000000000000000e+00, -1.9868405370494093e-06, 0.0000000000000000e+00, 3.9736810740988186e-06, 0.0000000000000000e+00,
        -3.9736810740988186e-06, 0.0000000000000000e+00, 1.9868405370494093e-06, 0.0000000000000000e+00, -3.9736810740988182e-07,
    ],
    [
        3.3580024887174834e-07, 0.0000000000000000e+00, -1.6790012443587417e-06, 0.0000000000000000e+00, 3.3580024887174831e-06, 0.0000000000000000e+00,
        -3.3580024887174831e-06, 0.0000000000000000e+00, 1.6790012443587417e-06, 0.0000000000000000e+00, -3.3580024887174834e-07,
    ],
    [
        2.0382201183419963e-07, 0.0000000000000000e+00, -1.0191100591709980e-06, 0.0000000000000000e+00, 2.0382201183419961e-06, 0.0000000000000000e+00,
        -2.0382201183419961e-06, 0.0000000000000000e+00, 1.0191100591709980e-06, 0.0000000000000000e+00, -2.0382201183419963e-07,
    ],
    [
        1.2499023203863408e-07, 0.0000000000000000e+00, -6.2495116019317033e-07, 0.0000000000000000e+00, 1.2499023203863407e-06, 0.0000000000000000e+00,
        -1.2499023203863407e-06, 0.0000000000000000e+00, 6.2495116019317033e-07, 0.0000000000000000e+00, -1.2499023203863408e-07,
    ],
    [
        5.6630159667685089e-08, 0.0000000000000000e+00, -2.8315079833842542e-07, 0.0000000000000000e+00, 5.6630159667685085e-07, 0.0000000000000000e+00,
        -5.6630159667685085e-07, 0.0000000000000000e+00, 2.8315079833842542e-07, 0.0000000000000000e+00, -5.6630159667685089e-08,
    ],
    [
        1.4420867271822984e-08, 0.0000000000000000e+00, -7.2104336359114914e-08, 0.0000000000000000e+00, 1.4420867271822985e-07, 0.0000000000000000e+00,
        -1.4420867271822985e-07, 0.0000000000000000e+00, 7.2104336359114914e-08, 0.0000000000000000e+00, -1.4420867271822984e-08,
    ],
];

pub const IIR_A_COEFFICIENTS: [[f64; 10]; 10] = [
    [
        -5.7705146897538286e+00, 1.7895013892403895e+01, -3.6494405840572341e+01, 5.3810447295816346e+01, -5.9174777137052203e+01, 4.9241703323457536e+01,
        -3.0560413600024901e+01, 1.3712967138023354e+01, -4.0465080754568028e+00, 6.4170042308717012e-01,
    ],
    [
        -4.4649278761023874e+00, 1.2506357521324768e+01, -2.3309364005990219e+01, 3.3079613874392209e+01, -3.5487390933143217e+01, 2.9984189970739155e+01,
        -1.9151121096945168e+01, 9.3137914120838392e+00, -3.0139913723886997e+00, 6.1187040270716420e-01,
    ],
    [
        -2.9350901328199193e+00, 7.9440528250048850e+00, -1.2584789716288697e+01, 1.7987169478940320e+01, -1.7962078860529541e+01, 1.6181801558904610e+01,
        -1.0185305311729321e+01, 5.7840795376710172e+00, -1.9225498952617726e+00, 5.8927799199774644e-01,
    ],
    [
        -1.3489684970231106e+00, 5.2066485145451287e+00, -5.0297463612180842e+00, 1.0006232978243222e+01, -6.8474942046535894e+00, 8.9631074296819584e+00,
        -4.0357296707754697e+00, 3.7421589869097858e+00, -8.6846790401327900e-01, 5.7668672807497734e-01,
    ],
    [
        7.8247130111688712e-01, 4.7202920744289383e+00, 2.8398160028940467e+00, 8.6722619855410663e+00, 3.8300294479288000e+00, 7.7623466460480000e+00,
        2.2751576245131622e+00, 3.3849386684432119e+00, 5.0223964795168263e-01, 5.7451744469806221e-01,
    ],
    [
        2.5978162198063814e+00, 7.1922164808996794e+00, 1.0739625274436575e+01, 1.5715109177893316e+01, 1.5143145584152419e+01, 1.4120832837946006e+01,
        8.6711150181724239e+00, 5.2178486645721547e+00, 1.6934799587709823e+00, 5.8575303392387845e-01,
    ],
    [
        4.7704801659996905e+00, 1.3643952737677957e+01, 2.6015177903222636e+01, 3.7193148281615706e+01, 4.0174656496304777e+01, 3.3778522193797599e+01,
        2.1457652495566148e+01, 1.0220527653608968e+01, 3.2454349561733697e+00, 6.1785777880827220e-01,
    ],
    [
        5.9753578579028250e+00, 1.8865690514380898e+01, 3.8979506306389759e+01, 5.7881741826435295e+01, 6.3862592852323360e+01, 5.3062854162339697e+01,
        3.2759281140629561e+01, 1.4535157733811671e+01, 4.2204618376136063e+00, 6.4750790118250257e-01,
    ],
    [
        7.2191528254949686e+00, 2.5491155267308244e+01, 5.6923337740782529e+01, 8.8453215292066290e+01, 9.9571815553557897e+01, 8.2167522128224718e+01,
        4.9120580405427084e+01, 2.0433803698411811e+01, 5.3756687624465984e+00, 6.9172397911586414e-01,
    ],
    [
        8.4261931179026472e+00, 3.3130021913805699e+01, 7.9744162188127618e+01, 1.2987239089918106e+02, 1.4938032756461112e+02, 1.2285226166138752e+02,
        7.1356171424730718e+01, 2.8042755405492667e+01, 6.7467821854966914e+00, 7.5741098824227804e-01,
    ],
];
